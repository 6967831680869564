//! Input validation for knowledge base entities.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API layer and any future CLI or import tooling.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of question and answer text.
pub const MAX_TEXT_LEN: usize = 10_000;

/// Maximum length of a tutor's full name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a tutor's email address.
pub const MAX_EMAIL_LEN: usize = 320;

/// Maximum length of a tag name.
pub const MAX_TAG_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate question text (non-empty, <= 10000 chars).
pub fn validate_question_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Question text must not be empty".into(),
        ));
    }
    if text.len() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(
            "Question text must be at most 10000 characters".into(),
        ));
    }
    Ok(())
}

/// Validate answer text (non-empty, <= 10000 chars).
pub fn validate_answer_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Answer text must not be empty".into(),
        ));
    }
    if text.len() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(
            "Answer text must be at most 10000 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a tutor's full name (non-empty, <= 200 chars).
pub fn validate_tutor_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Tutor name must not be empty".into(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(
            "Tutor name must be at most 200 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a tutor's email address (non-empty, contains '@', <= 320 chars).
pub fn validate_tutor_email(email: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation(
            "Tutor email must not be empty".into(),
        ));
    }
    if !email.contains('@') {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(
            "Tutor email must be at most 320 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a tag name (non-empty, <= 100 chars).
pub fn validate_tag_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Tag name must not be empty".into()));
    }
    if name.len() > MAX_TAG_LEN {
        return Err(CoreError::Validation(
            "Tag name must be at most 100 characters".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
