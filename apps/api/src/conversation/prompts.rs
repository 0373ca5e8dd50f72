// All assistant-facing message text for the intake conversation.
// One prompt per phase plus the matching rejection messages. Light
// **bold** emphasis marks the field currently being requested.

/// Seeded into every new session as the opening assistant turn.
pub const GREETING_SEED: &str =
    "Hello! I'm Scout, the AI hiring assistant. Let's begin. What's your **Full Name**?";

pub const ASK_PHONE: &str = "Great. What's your **Phone Number**?";

pub const ASK_YOE: &str = "How many **Years of Experience** do you have?";

pub const ASK_POSITION: &str = "What **Position(s)** are you applying for?";

pub const ASK_LOCATION: &str = "What's your **Current Location** (City, Country)?";

pub const ASK_TECH_STACK: &str =
    "List your **Tech Stack** separated by commas (e.g., Python, React, SQL).";

pub const REJECT_NAME: &str = "Please tell me your **Full Name** to get started.";

pub const REJECT_EMAIL: &str = "Invalid email. Please try again.";

pub const REJECT_PHONE: &str = "Invalid phone number. Try again.";

pub const REJECT_YOE_NOT_A_NUMBER: &str = "Enter a number please.";

pub const REJECT_YOE_NEGATIVE: &str = "Experience can't be negative.";

pub const REJECT_POSITION: &str = "Please tell me which **Position(s)** you're applying for.";

pub const REJECT_LOCATION: &str = "Please tell me your **Current Location**.";

pub const REJECT_TECH_STACK: &str = "Please provide a valid tech stack.";

pub const FINAL_REMINDER: &str = "If you're done, type 'done' to complete.";

pub const CLOSING: &str = "Thank you! We'll review your info and get back to you soon.";

/// Follow-up to an accepted full name, asking for the next field.
pub fn ask_email(full_name: &str) -> String {
    format!("Nice to meet you, {full_name}! What's your **Email Address**?")
}

/// Acknowledgement emitted while the question generator runs.
pub fn generating_questions(technologies: &[String]) -> String {
    format!(
        "Thanks! Generating questions for: **{}**.",
        technologies.join(", ")
    )
}

/// Wraps the generator's raw output (or its error text) for the transcript.
pub fn questions_message(questions: &str) -> String {
    format!("Here are your questions:\n\n{questions}\n\nType 'done' to finish.")
}
