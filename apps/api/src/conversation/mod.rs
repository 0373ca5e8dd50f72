// Candidate intake conversation: one linear pass over the profile fields,
// then question generation, then persistence. The controller owns all
// per-session state; the HTTP layer only holds a reference.

pub mod controller;
pub mod handlers;
pub mod prompts;
pub mod validators;

pub use controller::{ChatRole, ChatTurn, ConversationController, ConversationState, Phase};
