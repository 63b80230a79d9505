//! Validation rules for notes and highlights.
//!
//! Both record types carry an opaque reference string produced by
//! [`crate::reference::format_reference`]; the rules here only guard
//! against empty or oversized input, not reference syntax.

use crate::error::CoreError;

/// Maximum length of a note or highlight body, in bytes.
pub const MAX_BODY_LENGTH: usize = 10_000;
/// Maximum length of a stored reference string, in bytes.
pub const MAX_REFERENCE_LENGTH: usize = 200;

/// Validate a stored reference string (non-blank, bounded length).
pub fn validate_reference(reference: &str) -> Result<(), CoreError> {
    if reference.trim().is_empty() {
        return Err(CoreError::Validation(
            "Reference must not be blank".to_string(),
        ));
    }
    if reference.len() > MAX_REFERENCE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Reference exceeds {MAX_REFERENCE_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Validate a note body (non-blank, bounded length).
pub fn validate_note_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Note body must not be blank".to_string(),
        ));
    }
    if body.len() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note body exceeds {MAX_BODY_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Validate a highlight color token (non-blank; the client owns the palette).
pub fn validate_highlight_color(color: &str) -> Result<(), CoreError> {
    if color.trim().is_empty() {
        return Err(CoreError::Validation(
            "Highlight color must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional highlight body (bounded length when present).
pub fn validate_highlight_body(body: Option<&str>) -> Result<(), CoreError> {
    if let Some(body) = body {
        if body.len() > MAX_BODY_LENGTH {
            return Err(CoreError::Validation(format!(
                "Highlight body exceeds {MAX_BODY_LENGTH} bytes"
            )));
        }
    }
    Ok(())
}
