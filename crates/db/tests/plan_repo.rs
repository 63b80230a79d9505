//! Plan repository tests: creation, toggle/aggregate atomicity, scoping.

mod common;

use chrono::Utc;

use selah_core::progress::ALL_READINGS_COMPLETED;
use selah_core::scope::PlanItemDraft;
use selah_db::models::plan::NewPlan;
use selah_db::repositories::PlanRepo;

use common::{seed_user, test_pool};

/// One chapter-1 reading per New Testament book, like a "30 Day NT"
/// starter plan.
fn nt_starter_items() -> Vec<PlanItemDraft> {
    let books = [
        "Matthew",
        "Mark",
        "Luke",
        "John",
        "Acts",
        "Romans",
        "1 Corinthians",
        "2 Corinthians",
        "Galatians",
        "Ephesians",
        "Philippians",
        "Colossians",
        "1 Thessalonians",
        "2 Thessalonians",
        "1 Timothy",
        "2 Timothy",
        "Titus",
        "Philemon",
        "Hebrews",
        "James",
        "1 Peter",
        "2 Peter",
        "1 John",
        "2 John",
        "3 John",
        "Jude",
        "Revelation",
    ];
    books
        .iter()
        .map(|name| PlanItemDraft {
            translation_id: "NIV".to_string(),
            book_id: name.to_lowercase().replace(' ', "-"),
            chapter: 1,
            label: format!("{name} 1"),
        })
        .collect()
}

fn new_plan(title: &str, items: Vec<PlanItemDraft>) -> NewPlan {
    NewPlan {
        title: title.to_string(),
        items,
        fallback_progress: 0,
        fallback_next_reading: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_items_forces_zero_progress() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;

    let input = NewPlan {
        title: "30 Day NT".to_string(),
        items: nt_starter_items(),
        // A caller-supplied progress must be ignored when items exist.
        fallback_progress: 50,
        fallback_next_reading: "ignored".to_string(),
    };
    let created = PlanRepo::create(&pool, user, &input, Utc::now())
        .await
        .unwrap();

    assert_eq!(created.plan.progress_percent, 0);
    assert_eq!(created.plan.total_items, 27);
    assert_eq!(created.plan.completed_items, 0);
    assert_eq!(created.plan.next_reading, "Matthew 1");

    assert_eq!(created.items.len(), 27);
    // Order indexes are positional and items start unread.
    for (i, item) in created.items.iter().enumerate() {
        assert_eq!(item.order_index, i as i64);
        assert!(item.completed_at.is_none());
    }
}

#[tokio::test]
async fn create_without_items_keeps_caller_fallback() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;

    let input = NewPlan {
        title: "Empty shell".to_string(),
        items: Vec::new(),
        fallback_progress: 40,
        fallback_next_reading: "Pick up where you left off".to_string(),
    };
    let created = PlanRepo::create(&pool, user, &input, Utc::now())
        .await
        .unwrap();

    assert_eq!(created.plan.progress_percent, 40);
    assert_eq!(created.plan.next_reading, "Pick up where you left off");
    assert_eq!(created.plan.total_items, 0);
    assert!(created.items.is_empty());
}

// ---------------------------------------------------------------------------
// Toggle + aggregate recompute
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_updates_aggregate_and_reverts() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;
    let created = PlanRepo::create(&pool, user, &new_plan("30 Day NT", nt_starter_items()), Utc::now())
        .await
        .unwrap();
    let first = created.items[0].id;

    // Complete item #1: 1/27 rounds to 4%, next reading moves to item #2.
    let (plan, item) = PlanRepo::toggle_item(&pool, user, created.plan.id, first, true, Utc::now())
        .await
        .unwrap()
        .expect("item belongs to plan");
    assert!(item.completed_at.is_some());
    assert_eq!(plan.completed_items, 1);
    assert_eq!(plan.total_items, 27);
    assert_eq!(plan.progress_percent, 4);
    assert_eq!(plan.next_reading, "Mark 1");

    // Toggle back to unread: everything reverts.
    let (plan, item) = PlanRepo::toggle_item(&pool, user, created.plan.id, first, false, Utc::now())
        .await
        .unwrap()
        .unwrap();
    assert!(item.completed_at.is_none());
    assert_eq!(plan.completed_items, 0);
    assert_eq!(plan.progress_percent, 0);
    assert_eq!(plan.next_reading, "Matthew 1");
}

#[tokio::test]
async fn completing_everything_yields_sentinel() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;
    let items = vec![
        PlanItemDraft {
            translation_id: "NIV".into(),
            book_id: "jude".into(),
            chapter: 1,
            label: "Jude 1".into(),
        },
        PlanItemDraft {
            translation_id: "NIV".into(),
            book_id: "philemon".into(),
            chapter: 1,
            label: "Philemon 1".into(),
        },
    ];
    let created = PlanRepo::create(&pool, user, &new_plan("Short letters", items), Utc::now())
        .await
        .unwrap();

    for item in &created.items {
        PlanRepo::toggle_item(&pool, user, created.plan.id, item.id, true, Utc::now())
            .await
            .unwrap()
            .unwrap();
    }

    let plan = PlanRepo::find_by_id(&pool, user, created.plan.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(plan.progress_percent, 100);
    assert_eq!(plan.completed_items, 2);
    assert_eq!(plan.next_reading, ALL_READINGS_COMPLETED);
}

#[tokio::test]
async fn retoggling_completed_item_keeps_original_timestamp() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;
    let created = PlanRepo::create(&pool, user, &new_plan("30 Day NT", nt_starter_items()), Utc::now())
        .await
        .unwrap();
    let first = created.items[0].id;

    let (_, item_a) = PlanRepo::toggle_item(&pool, user, created.plan.id, first, true, Utc::now())
        .await
        .unwrap()
        .unwrap();
    let later = Utc::now() + chrono::Duration::hours(1);
    let (_, item_b) = PlanRepo::toggle_item(&pool, user, created.plan.id, first, true, later)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item_a.completed_at, item_b.completed_at);
}

// ---------------------------------------------------------------------------
// Not-found and ownership scoping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_foreign_item_mutates_nothing() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;
    let plan_a = PlanRepo::create(&pool, user, &new_plan("Plan A", nt_starter_items()), Utc::now())
        .await
        .unwrap();
    let plan_b = PlanRepo::create(&pool, user, &new_plan("Plan B", nt_starter_items()), Utc::now())
        .await
        .unwrap();

    // Item from plan B addressed through plan A: not found.
    let result = PlanRepo::toggle_item(
        &pool,
        user,
        plan_a.plan.id,
        plan_b.items[0].id,
        true,
        Utc::now(),
    )
    .await
    .unwrap();
    assert!(result.is_none());

    // Neither the item nor either aggregate moved.
    let a = PlanRepo::find_with_items(&pool, user, plan_a.plan.id)
        .await
        .unwrap()
        .unwrap();
    let b = PlanRepo::find_with_items(&pool, user, plan_b.plan.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(a.plan.completed_items, 0);
    assert_eq!(b.plan.completed_items, 0);
    assert!(b.items[0].completed_at.is_none());
}

#[tokio::test]
async fn plans_are_invisible_across_users() {
    let pool = test_pool().await;
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    let created = PlanRepo::create(&pool, owner, &new_plan("Private", nt_starter_items()), Utc::now())
        .await
        .unwrap();

    assert!(PlanRepo::find_by_id(&pool, other, created.plan.id)
        .await
        .unwrap()
        .is_none());
    let toggled = PlanRepo::toggle_item(
        &pool,
        other,
        created.plan.id,
        created.items[0].id,
        true,
        Utc::now(),
    )
    .await
    .unwrap();
    assert!(toggled.is_none());
    assert!(!PlanRepo::delete(&pool, other, created.plan.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Deletion and daily focus
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_cascades_to_items() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;
    let created = PlanRepo::create(&pool, user, &new_plan("Doomed", nt_starter_items()), Utc::now())
        .await
        .unwrap();

    assert!(PlanRepo::delete(&pool, user, created.plan.id).await.unwrap());
    assert!(PlanRepo::find_by_id(&pool, user, created.plan.id)
        .await
        .unwrap()
        .is_none());
    let orphans = PlanRepo::list_items(&pool, created.plan.id).await.unwrap();
    assert!(orphans.is_empty());
}

#[tokio::test]
async fn random_incomplete_item_skips_completed_and_other_users() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "reader@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;

    let items = vec![
        PlanItemDraft {
            translation_id: "NIV".into(),
            book_id: "jude".into(),
            chapter: 1,
            label: "Jude 1".into(),
        },
        PlanItemDraft {
            translation_id: "NIV".into(),
            book_id: "philemon".into(),
            chapter: 1,
            label: "Philemon 1".into(),
        },
    ];
    let created = PlanRepo::create(&pool, user, &new_plan("Short letters", items.clone()), Utc::now())
        .await
        .unwrap();
    PlanRepo::create(&pool, other, &new_plan("Other user's", items), Utc::now())
        .await
        .unwrap();

    PlanRepo::toggle_item(&pool, user, created.plan.id, created.items[0].id, true, Utc::now())
        .await
        .unwrap()
        .unwrap();

    // Only the user's one remaining unread item is eligible.
    let pick = PlanRepo::random_incomplete_item(&pool, user)
        .await
        .unwrap()
        .expect("one unread item remains");
    assert_eq!(pick.id, created.items[1].id);

    PlanRepo::toggle_item(&pool, user, created.plan.id, created.items[1].id, true, Utc::now())
        .await
        .unwrap()
        .unwrap();
    assert!(PlanRepo::random_incomplete_item(&pool, user)
        .await
        .unwrap()
        .is_none());
}
