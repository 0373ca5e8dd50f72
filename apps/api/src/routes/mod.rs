pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::conversation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake chat
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/chat/transcript", get(handlers::handle_transcript))
        // Stored records
        .route("/api/v1/candidates", get(handlers::handle_candidates))
        .with_state(state)
}
