//! Reading plan and plan item models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use selah_core::scope::PlanItemDraft;
use selah_core::types::{DbId, Timestamp};

/// A row from the `plans` table.
///
/// The four aggregate columns (`progress_percent`, `next_reading`,
/// `total_items`, `completed_items`) are derived from the item set and
/// rewritten in the same transaction as any item completion change.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Plan {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub progress_percent: i64,
    pub next_reading: String,
    pub total_items: i64,
    pub completed_items: i64,
    pub created_at: Timestamp,
}

/// A row from the `plan_items` table.
///
/// Everything except `completed_at` is immutable after creation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanItem {
    pub id: DbId,
    pub plan_id: DbId,
    pub translation_id: String,
    pub book_id: String,
    pub chapter: i64,
    pub label: String,
    pub order_index: i64,
    pub completed_at: Option<Timestamp>,
}

/// Insert payload for a plan.
///
/// When `items` is non-empty the fallback fields are ignored and initial
/// progress is forced to zero; when `items` is empty they are stored as
/// given (a plan with no items is a valid but inert aggregate).
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlan {
    pub title: String,
    pub items: Vec<PlanItemDraft>,
    #[serde(default)]
    pub fallback_progress: i64,
    #[serde(default)]
    pub fallback_next_reading: String,
}

/// A plan together with its ordered item list.
#[derive(Debug, Clone, Serialize)]
pub struct PlanWithItems {
    #[serde(flatten)]
    pub plan: Plan,
    pub items: Vec<PlanItem>,
}
