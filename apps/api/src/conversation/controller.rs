//! The intake state machine.
//!
//! One phase per profile field, in fixed linear order. A valid answer fills
//! its field and advances exactly one phase; an invalid answer re-prompts in
//! place. Leaving `tech_stack` triggers question generation with no
//! intervening user turn, and the "done" sentinel in `final_notes` triggers
//! persistence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::conversation::prompts;
use crate::conversation::validators::{self, YearsError};
use crate::models::candidate::CandidateProfile;
use crate::questions::QuestionSource;
use crate::store::ProfileStore;

/// Case-insensitive token that ends the final-notes phase.
const SENTINEL: &str = "done";

/// The discrete state of the conversation. Each collecting phase is named
/// after the field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Greeting,
    Email,
    Phone,
    Yoe,
    Position,
    Location,
    TechStack,
    GenerateQuestions,
    FinalNotes,
    Ended,
}

impl Phase {
    /// The fixed linear order of the intake flow. `Ended` is terminal.
    pub fn next(self) -> Phase {
        match self {
            Phase::Greeting => Phase::Email,
            Phase::Email => Phase::Phone,
            Phase::Phone => Phase::Yoe,
            Phase::Yoe => Phase::Position,
            Phase::Position => Phase::Location,
            Phase::Location => Phase::TechStack,
            Phase::TechStack => Phase::GenerateQuestions,
            Phase::GenerateQuestions => Phase::FinalNotes,
            Phase::FinalNotes => Phase::Ended,
            Phase::Ended => Phase::Ended,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Assistant,
    User,
}

/// One entry in the transcript. The transcript is append-only and always
/// reflects the true history of exchanged messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Everything a session accumulates: the transcript, the current phase, the
/// profile under construction, and the parsed tech stack.
#[derive(Debug)]
pub struct ConversationState {
    pub turns: Vec<ChatTurn>,
    pub phase: Phase,
    pub profile: CandidateProfile,
    pub tech_stack: Vec<String>,
}

impl ConversationState {
    fn new() -> Self {
        Self {
            turns: vec![ChatTurn::assistant(prompts::GREETING_SEED)],
            phase: Phase::Greeting,
            profile: CandidateProfile::default(),
            tech_stack: Vec::new(),
        }
    }
}

/// Drives the session: validates each answer against the current phase,
/// fills the profile, and invokes the question generator and the profile
/// store at their respective phase edges.
pub struct ConversationController {
    state: ConversationState,
    questions: Arc<dyn QuestionSource>,
    store: ProfileStore,
}

impl ConversationController {
    pub fn new(questions: Arc<dyn QuestionSource>, store: ProfileStore) -> Self {
        Self {
            state: ConversationState::new(),
            questions,
            store,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Processes one user message to completion, including any downstream
    /// calls, and returns the assistant messages produced for this turn.
    /// The user turn is recorded before processing, the replies after.
    pub async fn handle_turn(&mut self, input: &str) -> Vec<String> {
        self.state.turns.push(ChatTurn::user(input));

        let replies = self.advance(input).await;

        for reply in &replies {
            self.state.turns.push(ChatTurn::assistant(reply.clone()));
        }
        replies
    }

    async fn advance(&mut self, input: &str) -> Vec<String> {
        match self.state.phase {
            Phase::Greeting => match validators::non_empty(input) {
                Some(name) => {
                    let name = name.to_string();
                    self.state.profile.full_name = Some(name.clone());
                    self.step();
                    vec![prompts::ask_email(&name)]
                }
                None => vec![prompts::REJECT_NAME.to_string()],
            },

            Phase::Email => {
                if validators::is_valid_email(input) {
                    self.state.profile.email_address = Some(input.trim().to_string());
                    self.step();
                    vec![prompts::ASK_PHONE.to_string()]
                } else {
                    vec![prompts::REJECT_EMAIL.to_string()]
                }
            }

            Phase::Phone => {
                if validators::is_valid_phone(input) {
                    self.state.profile.phone_number = Some(input.trim().to_string());
                    self.step();
                    vec![prompts::ASK_YOE.to_string()]
                } else {
                    vec![prompts::REJECT_PHONE.to_string()]
                }
            }

            Phase::Yoe => match validators::parse_years(input) {
                Ok(years) => {
                    self.state.profile.years_of_experience = Some(years);
                    self.step();
                    vec![prompts::ASK_POSITION.to_string()]
                }
                Err(YearsError::NotANumber) => vec![prompts::REJECT_YOE_NOT_A_NUMBER.to_string()],
                Err(YearsError::Negative) => vec![prompts::REJECT_YOE_NEGATIVE.to_string()],
            },

            Phase::Position => match validators::non_empty(input) {
                Some(position) => {
                    self.state.profile.desired_position = Some(position.to_string());
                    self.step();
                    vec![prompts::ASK_LOCATION.to_string()]
                }
                None => vec![prompts::REJECT_POSITION.to_string()],
            },

            Phase::Location => match validators::non_empty(input) {
                Some(location) => {
                    self.state.profile.current_location = Some(location.to_string());
                    self.step();
                    vec![prompts::ASK_TECH_STACK.to_string()]
                }
                None => vec![prompts::REJECT_LOCATION.to_string()],
            },

            Phase::TechStack => {
                let parsed = validators::parse_tech_stack(input);
                if parsed.is_empty() {
                    return vec![prompts::REJECT_TECH_STACK.to_string()];
                }
                // The raw comma-joined text is what gets persisted; the
                // parsed sequence only drives question generation.
                self.state.profile.tech_stack = Some(input.to_string());
                self.state.tech_stack = parsed;
                self.step();

                // generate_questions is entered without consuming another
                // user turn: run the generator now and move straight on.
                let ack = prompts::generating_questions(&self.state.tech_stack);
                let questions = self.questions.generate(&self.state.tech_stack).await;
                self.step();
                vec![ack, prompts::questions_message(&questions)]
            }

            Phase::GenerateQuestions => {
                // Entered and left inside the TechStack arm, so no user turn
                // ever lands here.
                vec![]
            }

            Phase::FinalNotes => {
                if input.trim().eq_ignore_ascii_case(SENTINEL) {
                    self.step();
                    self.persist();
                    vec![prompts::CLOSING.to_string()]
                } else {
                    vec![prompts::FINAL_REMINDER.to_string()]
                }
            }

            // Terminal: record the turn, say nothing.
            Phase::Ended => vec![],
        }
    }

    fn step(&mut self) {
        let from = self.state.phase;
        self.state.phase = from.next();
        debug!("phase {from:?} -> {:?}", self.state.phase);
    }

    fn persist(&mut self) {
        match self.state.profile.email_address.clone() {
            Some(email) if !email.is_empty() => {
                if !self.state.profile.is_complete() {
                    warn!("profile for {email} is missing fields at save time");
                }
                self.store.put(email, self.state.profile.clone());
            }
            // Unreachable through normal phase order, but must not crash.
            _ => warn!("email is required to save candidate data; skipping save"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedQuestions;

    #[async_trait]
    impl QuestionSource for CannedQuestions {
        async fn generate(&self, technologies: &[String]) -> String {
            format!("QUESTIONS[{}]", technologies.join("|"))
        }
    }

    fn controller() -> (ConversationController, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path().join("candidates.json"));
        (
            ConversationController::new(Arc::new(CannedQuestions), store),
            dir,
        )
    }

    async fn feed(c: &mut ConversationController, inputs: &[&str]) {
        for input in inputs {
            c.handle_turn(input).await;
        }
    }

    #[test]
    fn test_new_session_seeds_greeting_turn() {
        let (c, _dir) = controller();
        assert_eq!(c.state().phase, Phase::Greeting);
        assert_eq!(c.state().turns.len(), 1);
        assert_eq!(c.state().turns[0].role, ChatRole::Assistant);
        assert_eq!(c.state().turns[0].content, prompts::GREETING_SEED);
    }

    #[tokio::test]
    async fn test_invalid_input_leaves_phase_and_profile_unchanged() {
        let (mut c, _dir) = controller();

        // (valid input to reach the phase, invalid probe for it)
        let script: &[(&str, &str)] = &[
            ("Jane Doe", "   "),
            ("jane@x.com", "not-an-email"),
            ("+1 555-0100", "abc"),
            ("3", "twelve"),
            ("Backend Engineer", "  "),
            ("Berlin, Germany", " "),
            ("Go, SQL", " , ,, "),
        ];

        // Probe first, then advance with the valid answer.
        for (valid, invalid) in script {
            let phase_before = c.state().phase;
            let profile_before = c.state().profile.clone();

            c.handle_turn(invalid).await;
            assert_eq!(c.state().phase, phase_before, "probe {invalid:?}");
            assert_eq!(c.state().profile, profile_before, "probe {invalid:?}");

            c.handle_turn(valid).await;
        }
    }

    #[tokio::test]
    async fn test_valid_inputs_advance_in_fixed_order() {
        let (mut c, _dir) = controller();

        let expected: &[(&str, Phase)] = &[
            ("Jane Doe", Phase::Email),
            ("jane@x.com", Phase::Phone),
            ("+1 555-0100", Phase::Yoe),
            ("3", Phase::Position),
            ("Backend Engineer", Phase::Location),
            ("Berlin, Germany", Phase::TechStack),
            // tech_stack passes through generate_questions automatically
            ("Go, SQL", Phase::FinalNotes),
            ("done", Phase::Ended),
        ];

        for (input, phase) in expected {
            c.handle_turn(input).await;
            assert_eq!(c.state().phase, *phase, "after {input:?}");
        }
    }

    #[tokio::test]
    async fn test_tech_stack_parses_and_keeps_raw_text() {
        let (mut c, _dir) = controller();
        feed(
            &mut c,
            &[
                "Jane Doe",
                "jane@x.com",
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
            ],
        )
        .await;

        c.handle_turn("Python, React,  , SQL").await;
        assert_eq!(c.state().tech_stack, vec!["Python", "React", "SQL"]);
        assert_eq!(
            c.state().profile.tech_stack.as_deref(),
            Some("Python, React,  , SQL")
        );
    }

    #[tokio::test]
    async fn test_yoe_rejects_negative_then_accepts_valid() {
        let (mut c, _dir) = controller();
        feed(&mut c, &["Jane Doe", "jane@x.com", "+1 555-0100"]).await;
        assert_eq!(c.state().phase, Phase::Yoe);

        let replies = c.handle_turn("-1").await;
        assert_eq!(replies, vec![prompts::REJECT_YOE_NEGATIVE.to_string()]);
        assert_eq!(c.state().phase, Phase::Yoe);
        assert_eq!(c.state().profile.years_of_experience, None);

        c.handle_turn("5").await;
        assert_eq!(c.state().profile.years_of_experience, Some(5));
        assert_eq!(c.state().phase, Phase::Position);
    }

    #[tokio::test]
    async fn test_accepted_tech_stack_produces_two_messages() {
        let (mut c, _dir) = controller();
        feed(
            &mut c,
            &[
                "Jane Doe",
                "jane@x.com",
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
            ],
        )
        .await;

        let replies = c.handle_turn("Go, SQL").await;
        assert_eq!(replies.len(), 2);
        assert!(replies[0].contains("Go, SQL"));
        assert!(replies[1].contains("QUESTIONS[Go|SQL]"));
        assert!(replies[1].contains("done"));
    }

    #[tokio::test]
    async fn test_final_notes_reprompts_until_sentinel() {
        let (mut c, _dir) = controller();
        feed(
            &mut c,
            &[
                "Jane Doe",
                "jane@x.com",
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
                "Go, SQL",
            ],
        )
        .await;
        assert_eq!(c.state().phase, Phase::FinalNotes);

        let replies = c.handle_turn("what happens now?").await;
        assert_eq!(replies, vec![prompts::FINAL_REMINDER.to_string()]);
        assert_eq!(c.state().phase, Phase::FinalNotes);
    }

    #[tokio::test]
    async fn test_sentinel_is_case_insensitive() {
        let (mut c, _dir) = controller();
        feed(
            &mut c,
            &[
                "Jane Doe",
                "jane@x.com",
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
                "Go, SQL",
            ],
        )
        .await;

        c.handle_turn("DONE").await;
        assert_eq!(c.state().phase, Phase::Ended);
        assert!(c.store().all().contains_key("jane@x.com"));
    }

    #[tokio::test]
    async fn test_end_to_end_stores_complete_profile() {
        let (mut c, _dir) = controller();
        feed(
            &mut c,
            &[
                "Jane Doe",
                "jane@x.com",
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
                "Go, SQL",
            ],
        )
        .await;

        let replies = c.handle_turn("done").await;
        assert_eq!(replies, vec![prompts::CLOSING.to_string()]);
        assert_eq!(c.state().phase, Phase::Ended);

        let stored = &c.store().all()["jane@x.com"];
        assert!(stored.is_complete());
        assert_eq!(stored.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(stored.email_address.as_deref(), Some("jane@x.com"));
        assert_eq!(stored.phone_number.as_deref(), Some("+1 555-0100"));
        assert_eq!(stored.years_of_experience, Some(3));
        assert_eq!(stored.desired_position.as_deref(), Some("Backend Engineer"));
        assert_eq!(stored.current_location.as_deref(), Some("Berlin, Germany"));
        assert_eq!(stored.tech_stack.as_deref(), Some("Go, SQL"));
    }

    #[tokio::test]
    async fn test_ended_records_input_but_stays_silent() {
        let (mut c, _dir) = controller();
        feed(
            &mut c,
            &[
                "Jane Doe",
                "jane@x.com",
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
                "Go, SQL",
                "done",
            ],
        )
        .await;
        assert_eq!(c.state().phase, Phase::Ended);

        let turns_before = c.state().turns.len();
        let replies = c.handle_turn("hello?").await;
        assert!(replies.is_empty());
        assert_eq!(c.state().turns.len(), turns_before + 1);
        assert_eq!(c.state().turns.last().unwrap().role, ChatRole::User);
    }

    #[tokio::test]
    async fn test_transcript_keeps_rejected_turns() {
        let (mut c, _dir) = controller();
        c.handle_turn("Jane Doe").await;
        c.handle_turn("not-an-email").await;

        let contents: Vec<&str> = c
            .state()
            .turns
            .iter()
            .map(|t| t.content.as_str())
            .collect();
        assert!(contents.contains(&"not-an-email"));
        assert!(contents.contains(&prompts::REJECT_EMAIL));
    }

    #[tokio::test]
    async fn test_email_never_changes_once_set() {
        let (mut c, _dir) = controller();
        feed(&mut c, &["Jane Doe", "jane@x.com"]).await;
        assert_eq!(c.state().profile.email_address.as_deref(), Some("jane@x.com"));

        // No later phase touches the email field.
        feed(
            &mut c,
            &[
                "+1 555-0100",
                "3",
                "Backend Engineer",
                "Berlin, Germany",
                "Go, SQL",
                "done",
            ],
        )
        .await;
        assert_eq!(c.state().profile.email_address.as_deref(), Some("jane@x.com"));
    }
}
