use std::sync::LazyLock;

use regex::Regex;
use strum::AsRefStr;

use crate::ContactDraft;

/// `text@text.text`, unanchored: several `@` or dots pass as long as the
/// shape appears somewhere on one line. Line terminators are `\n`, `\r`,
/// U+2028 and U+2029.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\n\r\x{2028}\x{2029}]+@[^\n\r\x{2028}\x{2029}]+\.[^\n\r\x{2028}\x{2029}]+")
        .expect("email shape pattern is valid")
});

#[derive(thiserror::Error, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out your name, email, and message.")]
    #[strum(serialize = "missing-fields")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    #[strum(serialize = "invalid-email")]
    InvalidEmail,
}

impl ValidationError {
    /// Stable machine-readable code, e.g. `missing-fields`.
    pub fn code(&self) -> &str {
        self.as_ref()
    }
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Trims the draft and checks it, returning the trimmed values on success.
pub fn validate(draft: &ContactDraft) -> Result<ContactDraft, ValidationError> {
    let draft = draft.trimmed();

    if draft.name.is_empty() || draft.email.is_empty() || draft.message.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !is_email_shaped(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(draft)
}
