//! Axum route handlers for the intake chat.
//!
//! The handlers only relay between HTTP and the controller — all
//! conversation rules live in `controller.rs`.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::conversation::{ChatTurn, Phase};
use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant messages produced for this turn: usually one, two when an
    /// accepted tech stack triggers question generation, none past the end.
    pub replies: Vec<String>,
    pub phase: Phase,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub turns: Vec<ChatTurn>,
    pub phase: Phase,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub candidates: BTreeMap<String, CandidateProfile>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Feeds one user message to the conversation and returns the assistant
/// messages it produced. Validation failures inside the conversation are
/// re-prompts, not HTTP errors; only an empty message is rejected here.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let mut controller = state.controller.lock().await;
    let replies = controller.handle_turn(&request.message).await;

    Ok(Json(ChatResponse {
        replies,
        phase: controller.state().phase,
    }))
}

/// GET /api/v1/chat/transcript
///
/// The full ordered turn log, including the seeded greeting.
pub async fn handle_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let controller = state.controller.lock().await;
    Json(TranscriptResponse {
        turns: controller.state().turns.clone(),
        phase: controller.state().phase,
    })
}

/// GET /api/v1/candidates
///
/// Every stored candidate record, keyed by email.
pub async fn handle_candidates(State(state): State<AppState>) -> Json<CandidatesResponse> {
    let controller = state.controller.lock().await;
    Json(CandidatesResponse {
        candidates: controller.store().all().clone(),
    })
}
