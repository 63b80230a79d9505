//! Handlers for the `/plans` resource.
//!
//! Plans can be created from an explicit item list or generated from a
//! named scope plus a client-supplied book catalog. Completion toggles go
//! through `PlanRepo::toggle_item`, which recomputes the aggregate in the
//! same transaction as the item write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use selah_core::error::CoreError;
use selah_core::scope::{self, BookCatalog, PlanItemDraft};
use selah_core::types::DbId;
use selah_db::models::plan::{NewPlan, Plan, PlanItem, PlanWithItems};
use selah_db::repositories::PlanRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /plans`.
///
/// Either `items` is supplied explicitly, or `scope_id` +
/// `translation_id` + `catalog` together describe a generated plan. When
/// both are present the explicit items win.
#[derive(Debug, Deserialize)]
pub struct CreatePlanRequest {
    pub title: String,
    /// Readings per day used for the duration estimate (default 1).
    #[serde(default = "default_readings_per_day")]
    pub readings_per_day: f64,
    pub scope_id: Option<String>,
    pub translation_id: Option<String>,
    /// Book metadata keyed by book id, as served by the content provider.
    pub catalog: Option<BookCatalog>,
    pub items: Option<Vec<PlanItemDraft>>,
    /// Stored as given only when the resulting item list is empty.
    #[serde(default)]
    pub progress_percent: i64,
    /// Stored as given only when the resulting item list is empty.
    #[serde(default)]
    pub next_reading: String,
}

fn default_readings_per_day() -> f64 {
    1.0
}

/// Response body for `POST /plans`: the created plan plus the duration
/// estimate for the requested reading rate.
#[derive(Debug, Serialize)]
pub struct CreatePlanResponse {
    #[serde(flatten)]
    pub plan: PlanWithItems,
    pub estimated_days: u64,
}

/// Request body for `PATCH /plans/{id}/items/{item_id}`.
#[derive(Debug, Deserialize)]
pub struct ToggleItemRequest {
    pub completed: bool,
}

/// Response body for a completion toggle: the re-derived plan aggregate
/// and the updated item.
#[derive(Debug, Serialize)]
pub struct ToggleItemResponse {
    pub plan: Plan,
    pub item: PlanItem,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/plans
///
/// List the authenticated user's plans, newest first.
pub async fn list_plans(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Plan>>>> {
    let plans = PlanRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: plans }))
}

/// POST /api/v1/plans
///
/// Create a plan from explicit items or from a scope + catalog.
pub async fn create_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreatePlanRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatePlanResponse>>)> {
    selah_core::progress::validate_plan_title(&input.title)?;

    let items = resolve_items(&input)?;
    let estimated_days = scope::estimated_days(items.len(), input.readings_per_day);

    let new_plan = NewPlan {
        title: input.title.trim().to_string(),
        items,
        fallback_progress: input.progress_percent,
        fallback_next_reading: input.next_reading,
    };

    let plan = PlanRepo::create(&state.pool, auth_user.user_id, &new_plan, Utc::now()).await?;

    tracing::info!(
        user_id = auth_user.user_id,
        plan_id = plan.plan.id,
        total_items = plan.plan.total_items,
        "plan created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatePlanResponse {
                plan,
                estimated_days,
            },
        }),
    ))
}

/// GET /api/v1/plans/focus
///
/// Daily-focus suggestion: one incomplete item picked uniformly at
/// random across all of the user's plans. `data` is null when every
/// reading is done (or there are no plans).
pub async fn daily_focus(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Option<PlanItem>>>> {
    let item = PlanRepo::random_incomplete_item(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: item }))
}

/// GET /api/v1/plans/{id}
///
/// Fetch one plan with its ordered item list.
pub async fn get_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(plan_id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlanWithItems>>> {
    let plan = PlanRepo::find_with_items(&state.pool, auth_user.user_id, plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "plan",
            id: plan_id,
        }))?;
    Ok(Json(DataResponse { data: plan }))
}

/// PATCH /api/v1/plans/{id}/items/{item_id}
///
/// Set one item's completion state and return the updated plan + item.
pub async fn toggle_item(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((plan_id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<ToggleItemRequest>,
) -> AppResult<Json<DataResponse<ToggleItemResponse>>> {
    let (plan, item) = PlanRepo::toggle_item(
        &state.pool,
        auth_user.user_id,
        plan_id,
        item_id,
        input.completed,
        Utc::now(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "plan item",
        id: item_id,
    }))?;

    tracing::info!(
        user_id = auth_user.user_id,
        plan_id,
        item_id,
        completed = input.completed,
        progress_percent = plan.progress_percent,
        "plan item toggled"
    );

    Ok(Json(DataResponse {
        data: ToggleItemResponse { plan, item },
    }))
}

/// DELETE /api/v1/plans/{id}
///
/// Delete a plan and its items. Returns 204 No Content.
pub async fn delete_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(plan_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PlanRepo::delete(&state.pool, auth_user.user_id, plan_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "plan",
            id: plan_id,
        }));
    }

    tracing::info!(user_id = auth_user.user_id, plan_id, "plan deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the item list for a create request.
///
/// Explicit items take precedence. Otherwise the scope path needs all
/// three of scope id, translation id, and catalog; a request with none
/// of them creates an empty (inert) plan.
fn resolve_items(input: &CreatePlanRequest) -> Result<Vec<PlanItemDraft>, AppError> {
    if let Some(items) = &input.items {
        return Ok(items.clone());
    }

    match (&input.scope_id, &input.translation_id, &input.catalog) {
        (Some(scope_id), Some(translation_id), Some(catalog)) => {
            Ok(scope::generate_plan_items(scope_id, translation_id, catalog))
        }
        (None, None, None) => Ok(Vec::new()),
        _ => Err(AppError::BadRequest(
            "Generated plans need scope_id, translation_id, and catalog together".into(),
        )),
    }
}
