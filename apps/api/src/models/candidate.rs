use serde::{Deserialize, Serialize};

/// The candidate record accumulated across the conversation.
///
/// Every field starts unset and is filled exactly once by its phase.
/// `email_address`, once set, never changes — it is the persistence key.
/// Serialized field names match the stored-record layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "Full Name")]
    pub full_name: Option<String>,

    #[serde(rename = "Email Address")]
    pub email_address: Option<String>,

    #[serde(rename = "Phone Number")]
    pub phone_number: Option<String>,

    #[serde(rename = "Years of Experience")]
    pub years_of_experience: Option<u32>,

    #[serde(rename = "Desired Position(s)")]
    pub desired_position: Option<String>,

    #[serde(rename = "Current Location")]
    pub current_location: Option<String>,

    /// The tech stack exactly as the candidate typed it, comma-joined.
    /// The parsed sequence lives on the conversation state, not here.
    #[serde(rename = "Tech Stack")]
    pub tech_stack: Option<String>,
}

impl CandidateProfile {
    /// True once every field has been collected.
    pub fn is_complete(&self) -> bool {
        self.full_name.is_some()
            && self.email_address.is_some()
            && self.phone_number.is_some()
            && self.years_of_experience.is_some()
            && self.desired_position.is_some()
            && self.current_location.is_some()
            && self.tech_stack.is_some()
    }
}
