//! HTTP-level integration tests for notes and highlights.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, seed_user};

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// Create, list, and delete a note.
#[tokio::test]
async fn note_lifecycle() {
    let pool = common::test_pool().await;
    let user_id = seed_user(&pool, "notes@example.com").await;
    let app = common::build_test_app(pool);
    let token = common::auth_token(user_id);

    let body = serde_json::json!({
        "reference": "NIV John 3:16-18",
        "body": "For God so loved the world.",
    });
    let response = post_json_auth(app.clone(), "/api/v1/notes", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let note_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["reference"], "NIV John 3:16-18");

    let response = get_auth(app.clone(), "/api/v1/notes", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = delete_auth(app.clone(), &format!("/api/v1/notes/{note_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, "/api/v1/notes", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// A note with a blank body is rejected with 400.
#[tokio::test]
async fn note_blank_body_returns_400() {
    let pool = common::test_pool().await;
    let user_id = seed_user(&pool, "blanknote@example.com").await;
    let app = common::build_test_app(pool);
    let token = common::auth_token(user_id);

    let body = serde_json::json!({ "reference": "NIV John 3:16", "body": "   " });
    let response = post_json_auth(app, "/api/v1/notes", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Deleting another user's note returns 404 and leaves it in place.
#[tokio::test]
async fn note_delete_is_owner_scoped() {
    let pool = common::test_pool().await;
    let owner = seed_user(&pool, "noteowner@example.com").await;
    let intruder = seed_user(&pool, "notethief@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "reference": "ESV Psalm 23:1", "body": "Shepherd." });
    let response =
        post_json_auth(app.clone(), "/api/v1/notes", &common::auth_token(owner), body).await;
    let json = body_json(response).await;
    let note_id = json["data"]["id"].as_i64().unwrap();

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/notes/{note_id}"),
        &common::auth_token(intruder),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/api/v1/notes", &common::auth_token(owner)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Highlights
// ---------------------------------------------------------------------------

/// Create a highlight with and without a body; list shows both.
#[tokio::test]
async fn highlight_lifecycle() {
    let pool = common::test_pool().await;
    let user_id = seed_user(&pool, "highlights@example.com").await;
    let app = common::build_test_app(pool);
    let token = common::auth_token(user_id);

    let with_body = serde_json::json!({
        "reference": "NIV Romans 8:28",
        "color": "amber",
        "body": "All things work together.",
    });
    let response = post_json_auth(app.clone(), "/api/v1/highlights", &token, with_body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let without_body = serde_json::json!({ "reference": "NIV Romans 8:29", "color": "teal" });
    let response = post_json_auth(app.clone(), "/api/v1/highlights", &token, without_body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["body"].is_null());

    let response = get_auth(app, "/api/v1/highlights", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// A highlight without a color token is rejected with 400.
#[tokio::test]
async fn highlight_blank_color_returns_400() {
    let pool = common::test_pool().await;
    let user_id = seed_user(&pool, "nocolor@example.com").await;
    let app = common::build_test_app(pool);
    let token = common::auth_token(user_id);

    let body = serde_json::json!({ "reference": "NIV Romans 8:28", "color": "  " });
    let response = post_json_auth(app, "/api/v1/highlights", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
