use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::conversation::ConversationController;

/// Shared application state injected into all route handlers via Axum
/// extractors.
///
/// The controller owns the conversation state and the profile store; the
/// mutex serializes turns — one user message is processed to completion,
/// downstream calls included, before the next is accepted.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<ConversationController>>,
    /// Loaded runtime configuration.
    #[allow(dead_code)]
    pub config: Config,
}
