//! Plan progress aggregation.
//!
//! A plan's four derived fields (total, completed, percent, next
//! reading) are owned by this module and re-derived from the full item
//! set after every completion toggle. Persistence of the derived fields
//! together with the item write is the `selah-db` layer's job; the rules
//! live here so they can be tested without a database.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum length of a plan title, in bytes.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Next-reading label once every item in a plan is completed.
///
/// Distinct from any real item label (real labels always end in a
/// chapter number).
pub const ALL_READINGS_COMPLETED: &str = "All readings completed";

// ---------------------------------------------------------------------------
// Aggregate types
// ---------------------------------------------------------------------------

/// Completion view of one plan item, as needed by [`recompute`].
#[derive(Debug, Clone, Copy)]
pub struct ItemStatus<'a> {
    /// Zero-based position within the plan.
    pub order_index: i64,
    /// Display label, e.g. `"Matthew 5"`.
    pub label: &'a str,
    /// Whether the item has a completion timestamp.
    pub completed: bool,
}

/// The derived fields stored on a plan row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanAggregate {
    pub total_items: i64,
    pub completed_items: i64,
    /// 0-100, round-half-up.
    pub progress_percent: i64,
    pub next_reading: String,
}

// ---------------------------------------------------------------------------
// Recompute
// ---------------------------------------------------------------------------

/// Re-derive a plan's aggregate fields from its current item set.
///
/// - `progress_percent` is `round(100 * completed / total)` with
///   half-up rounding, or 0 for an empty item set.
/// - `next_reading` is the label of the unread item with the smallest
///   order index, or [`ALL_READINGS_COMPLETED`] when none remain.
pub fn recompute(items: &[ItemStatus<'_>]) -> PlanAggregate {
    let total_items = items.len() as i64;
    let completed_items = items.iter().filter(|i| i.completed).count() as i64;

    let progress_percent = if total_items == 0 {
        0
    } else {
        (100.0 * completed_items as f64 / total_items as f64).round() as i64
    };

    let next_reading = items
        .iter()
        .filter(|i| !i.completed)
        .min_by_key(|i| i.order_index)
        .map(|i| i.label.to_string())
        .unwrap_or_else(|| ALL_READINGS_COMPLETED.to_string());

    PlanAggregate {
        total_items,
        completed_items,
        progress_percent,
        next_reading,
    }
}

/// Next value of an item's completion timestamp for a toggle request.
///
/// Toggling an already-completed item to completed keeps the original
/// timestamp (idempotent, no rewrite); toggling to unread always clears
/// it.
pub fn next_completed_at(
    current: Option<Timestamp>,
    completed: bool,
    now: Timestamp,
) -> Option<Timestamp> {
    if completed {
        current.or(Some(now))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a plan title (non-blank, bounded length).
pub fn validate_plan_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Plan title must not be blank".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Plan title exceeds {MAX_TITLE_LENGTH} bytes"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
