//! Passage addressing: canonical verse-range reference strings and
//! verse-selection resolution.
//!
//! A reference string is the stable on-disk locator stored on notes and
//! highlights. It is deterministic display/search text and is never
//! parsed back by the system.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Verse selection
// ---------------------------------------------------------------------------

/// On-screen rectangle of a text selection, used by the client to place
/// the note/highlight popover. Pass-through data; never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A resolved verse-range selection.
///
/// Ephemeral: exists between a text-selection gesture and a save/cancel
/// action, and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseSelection {
    /// First verse of the range (`from_verse <= to_verse`).
    pub from_verse: u32,
    /// Last verse of the range.
    pub to_verse: u32,
    /// The selected text, trimmed.
    pub text: String,
    /// Optional bounding box for UI placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<SelectionRect>,
}

/// Resolve the two ends of a selection gesture into an ordered verse range.
///
/// The anchor and focus verse numbers arrive in gesture order, which is
/// not guaranteed to be ascending. Returns `None` ("no selection") when
/// either verse number is zero or the selected text is empty after
/// trimming.
pub fn resolve_selection(
    anchor_verse: u32,
    focus_verse: u32,
    text: &str,
    rect: Option<SelectionRect>,
) -> Option<VerseSelection> {
    if anchor_verse == 0 || focus_verse == 0 {
        return None;
    }
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(VerseSelection {
        from_verse: anchor_verse.min(focus_verse),
        to_verse: anchor_verse.max(focus_verse),
        text: text.to_string(),
        rect,
    })
}

// ---------------------------------------------------------------------------
// Reference formatting
// ---------------------------------------------------------------------------

/// Format the canonical reference string for a verse or verse range.
///
/// Output is `"{translation} {book} {chapter}:{from}"` for a single
/// verse, or `"{translation} {book} {chapter}:{from}-{to}"` for a span.
/// Labels are used as supplied; no whitespace or casing normalization is
/// performed.
///
/// Fails with [`CoreError::Validation`] when either label is blank, any
/// number is zero, or `from_verse > to_verse`.
pub fn format_reference(
    translation_id: &str,
    book_label: &str,
    chapter: u32,
    from_verse: u32,
    to_verse: u32,
) -> Result<String, CoreError> {
    if translation_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Translation id must not be blank".to_string(),
        ));
    }
    if book_label.trim().is_empty() {
        return Err(CoreError::Validation(
            "Book label must not be blank".to_string(),
        ));
    }
    if chapter == 0 || from_verse == 0 || to_verse == 0 {
        return Err(CoreError::Validation(
            "Chapter and verse numbers must be positive".to_string(),
        ));
    }
    if from_verse > to_verse {
        return Err(CoreError::Validation(format!(
            "Verse range start {from_verse} is after end {to_verse}"
        )));
    }

    if from_verse == to_verse {
        Ok(format!("{translation_id} {book_label} {chapter}:{from_verse}"))
    } else {
        Ok(format!(
            "{translation_id} {book_label} {chapter}:{from_verse}-{to_verse}"
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
