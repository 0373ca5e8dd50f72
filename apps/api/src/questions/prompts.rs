// LLM prompt constants for interview question generation.

/// System prompt — fixes the assistant's role for every generation call.
pub const QUESTION_SYSTEM: &str =
    "You are a technical recruiter generating interview questions. \
    Write clear, practical questions that probe real working knowledge. \
    Do NOT include answers, preamble, or commentary outside the requested format.";

/// Builds the user prompt for a parsed tech stack.
/// One labeled block per technology, each with a numbered question list.
pub fn question_prompt(technologies: &[String]) -> String {
    format!(
        r#"Generate 3 to 5 interview questions for EACH of the following technologies.

Technologies: {tech_list}

Output format — one block per technology, nothing else:

Python:
1. First question
2. Second question

React:
1. First question
2. Second question

Rules:
- Cover every listed technology, in the order given.
- 3 to 5 questions per technology, numbered from 1.
- Questions should range from fundamentals to applied experience."#,
        tech_list = technologies.join(", ")
    )
}
