//! Repository for the `plans` and `plan_items` tables.
//!
//! A plan owns its items; the four derived aggregate columns on the plan
//! row are recomputed from the full item set and persisted in the same
//! transaction as any item completion change, so a crash or a racing
//! sibling toggle can never leave the aggregate stale relative to the
//! items.

use sqlx::SqlitePool;

use selah_core::progress::{self, ItemStatus};
use selah_core::types::{DbId, Timestamp};

use crate::models::plan::{NewPlan, Plan, PlanItem, PlanWithItems};

/// Column list for plans queries.
const PLAN_COLUMNS: &str = "id, user_id, title, progress_percent, next_reading, \
    total_items, completed_items, created_at";

/// Column list for plan_items queries.
const ITEM_COLUMNS: &str = "id, plan_id, translation_id, book_id, chapter, label, \
    order_index, completed_at";

/// Provides owner-scoped operations for reading plans.
pub struct PlanRepo;

impl PlanRepo {
    /// Create a plan with its (possibly empty) item sequence in one
    /// transaction.
    ///
    /// With items, the initial aggregate is forced: progress 0, next
    /// reading = first item's label, items all unread with positional
    /// order indexes. Without items, the caller-supplied fallback
    /// progress and next-reading are stored as given.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &NewPlan,
        now: Timestamp,
    ) -> Result<PlanWithItems, sqlx::Error> {
        let (progress_percent, next_reading) = if input.items.is_empty() {
            (input.fallback_progress, input.fallback_next_reading.clone())
        } else {
            (0, input.items[0].label.clone())
        };
        let total_items = input.items.len() as i64;

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO plans
                (user_id, title, progress_percent, next_reading,
                 total_items, completed_items, created_at)
             VALUES ($1, $2, $3, $4, $5, 0, $6)
             RETURNING {PLAN_COLUMNS}"
        );
        let plan = sqlx::query_as::<_, Plan>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(progress_percent)
            .bind(&next_reading)
            .bind(total_items)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        let item_query = format!(
            "INSERT INTO plan_items
                (plan_id, translation_id, book_id, chapter, label, order_index)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(input.items.len());
        for (order_index, draft) in input.items.iter().enumerate() {
            let item = sqlx::query_as::<_, PlanItem>(&item_query)
                .bind(plan.id)
                .bind(&draft.translation_id)
                .bind(&draft.book_id)
                .bind(draft.chapter as i64)
                .bind(&draft.label)
                .bind(order_index as i64)
                .fetch_one(&mut *tx)
                .await?;
            items.push(item);
        }

        tx.commit().await?;
        Ok(PlanWithItems { plan, items })
    }

    /// Find a plan by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &SqlitePool,
        user_id: DbId,
        plan_id: DbId,
    ) -> Result<Option<Plan>, sqlx::Error> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Plan>(&query)
            .bind(plan_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a plan and its ordered item list, scoped to its owner.
    pub async fn find_with_items(
        pool: &SqlitePool,
        user_id: DbId,
        plan_id: DbId,
    ) -> Result<Option<PlanWithItems>, sqlx::Error> {
        let Some(plan) = Self::find_by_id(pool, user_id, plan_id).await? else {
            return Ok(None);
        };
        let items = Self::list_items(pool, plan_id).await?;
        Ok(Some(PlanWithItems { plan, items }))
    }

    /// List a user's plans, newest first.
    pub async fn list_by_owner(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Plan>, sqlx::Error> {
        let query = format!(
            "SELECT {PLAN_COLUMNS} FROM plans
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Plan>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a plan's items in reading order.
    pub async fn list_items(
        pool: &SqlitePool,
        plan_id: DbId,
    ) -> Result<Vec<PlanItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM plan_items
             WHERE plan_id = $1
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, PlanItem>(&query)
            .bind(plan_id)
            .fetch_all(pool)
            .await
    }

    /// Toggle one item's completion state and recompute the plan aggregate,
    /// as a single transaction.
    ///
    /// Returns `None` when the plan does not belong to `user_id` or the
    /// item does not belong to the plan; in that case nothing is written.
    /// Toggling an already-completed item to completed keeps its original
    /// timestamp, but the aggregate is still re-derived and persisted.
    /// The item set is re-read inside the transaction, after the item
    /// write, so the aggregate always reflects current persisted state.
    pub async fn toggle_item(
        pool: &SqlitePool,
        user_id: DbId,
        plan_id: DbId,
        item_id: DbId,
        completed: bool,
        now: Timestamp,
    ) -> Result<Option<(Plan, PlanItem)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let plan_query =
            format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = $1 AND user_id = $2");
        let plan = sqlx::query_as::<_, Plan>(&plan_query)
            .bind(plan_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if plan.is_none() {
            return Ok(None);
        }

        let item_query =
            format!("SELECT {ITEM_COLUMNS} FROM plan_items WHERE id = $1 AND plan_id = $2");
        let Some(current) = sqlx::query_as::<_, PlanItem>(&item_query)
            .bind(item_id)
            .bind(plan_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let completed_at = progress::next_completed_at(current.completed_at, completed, now);
        let update_query = format!(
            "UPDATE plan_items SET completed_at = $2
             WHERE id = $1
             RETURNING {ITEM_COLUMNS}"
        );
        let item = sqlx::query_as::<_, PlanItem>(&update_query)
            .bind(item_id)
            .bind(completed_at)
            .fetch_one(&mut *tx)
            .await?;

        let items_query = format!(
            "SELECT {ITEM_COLUMNS} FROM plan_items
             WHERE plan_id = $1
             ORDER BY order_index ASC"
        );
        let items = sqlx::query_as::<_, PlanItem>(&items_query)
            .bind(plan_id)
            .fetch_all(&mut *tx)
            .await?;

        let statuses: Vec<ItemStatus> = items
            .iter()
            .map(|i| ItemStatus {
                order_index: i.order_index,
                label: &i.label,
                completed: i.completed_at.is_some(),
            })
            .collect();
        let aggregate = progress::recompute(&statuses);

        let plan_update = format!(
            "UPDATE plans SET
                progress_percent = $2,
                next_reading = $3,
                total_items = $4,
                completed_items = $5
             WHERE id = $1
             RETURNING {PLAN_COLUMNS}"
        );
        let plan = sqlx::query_as::<_, Plan>(&plan_update)
            .bind(plan_id)
            .bind(aggregate.progress_percent)
            .bind(&aggregate.next_reading)
            .bind(aggregate.total_items)
            .bind(aggregate.completed_items)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            plan_id,
            item_id,
            progress_percent = plan.progress_percent,
            "aggregate recomputed"
        );
        Ok(Some((plan, item)))
    }

    /// Delete a plan and (via cascade) its items. Returns `true` if a row
    /// was deleted.
    pub async fn delete(
        pool: &SqlitePool,
        user_id: DbId,
        plan_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1 AND user_id = $2")
            .bind(plan_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pick one incomplete item uniformly at random across all of a
    /// user's plans, for the daily-focus suggestion.
    pub async fn random_incomplete_item(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Option<PlanItem>, sqlx::Error> {
        let query = "SELECT pi.id, pi.plan_id, pi.translation_id, pi.book_id, pi.chapter, \
                    pi.label, pi.order_index, pi.completed_at
             FROM plan_items pi
             JOIN plans p ON p.id = pi.plan_id
             WHERE p.user_id = $1 AND pi.completed_at IS NULL
             ORDER BY RANDOM()
             LIMIT 1";
        sqlx::query_as::<_, PlanItem>(query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
