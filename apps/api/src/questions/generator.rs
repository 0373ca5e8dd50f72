//! Question generation — pluggable, trait-based source of interview questions.
//!
//! Default: `LlmQuestionGenerator` (Claude via `llm_client`).
//! Tests substitute a canned implementation.
//!
//! The controller holds an `Arc<dyn QuestionSource>`.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::questions::prompts::{question_prompt, QUESTION_SYSTEM};

/// The question source trait. Implement this to swap backends without
/// touching the conversation controller.
///
/// Always returns displayable text: a failed generation comes back as a
/// human-readable error string, never as an error value. The transcript
/// shows what happened either way.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate(&self, technologies: &[String]) -> String;
}

/// Production question generator backed by the Claude API.
pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionSource for LlmQuestionGenerator {
    async fn generate(&self, technologies: &[String]) -> String {
        let prompt = question_prompt(technologies);

        match self.llm.call(&prompt, QUESTION_SYSTEM).await {
            Ok(response) => match response.text() {
                Some(text) => text.to_string(),
                None => {
                    warn!("question generation returned no text content");
                    "The question generator returned an empty response. \
                     You can still finish the interview."
                        .to_string()
                }
            },
            Err(e) => {
                warn!("question generation failed: {e}");
                format!("An error occurred while generating questions: {e}")
            }
        }
    }
}
