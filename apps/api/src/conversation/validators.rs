//! Pure validators for candidate answers.
//!
//! Each validator returns plain data the controller can branch on — no
//! panics, no error control flow. Patterns are compiled once.

use once_cell::sync::Lazy;
use regex::Regex;

/// local@domain.tld — word/dot/hyphen chars either side of `@`, then a
/// dot-separated TLD of word chars. `user@domain` (no TLD segment) fails.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

/// Optional leading `+`, then 7–20 digits, spaces, or hyphens.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s-]{7,20}$").unwrap());

/// Returns the trimmed input, or `None` if nothing remains after trimming.
pub fn non_empty(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

pub fn is_valid_phone(input: &str) -> bool {
    PHONE_RE.is_match(input)
}

/// Why a years-of-experience answer was rejected. The two cases carry
/// distinct re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearsError {
    NotANumber,
    Negative,
}

/// Parses a non-negative integer number of years.
pub fn parse_years(input: &str) -> Result<u32, YearsError> {
    match input.trim().parse::<i32>() {
        Err(_) => Err(YearsError::NotANumber),
        Ok(years) if years < 0 => Err(YearsError::Negative),
        Ok(years) => Ok(years as u32),
    }
}

/// Splits a comma-separated tech stack into trimmed, non-empty entries.
/// An empty result means the answer is rejected.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
