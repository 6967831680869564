//! HTTP-level integration tests for the answer endpoints.
//!
//! Answers follow the same versioned workflow as questions, with two extra
//! rules: an answer can only be created for an existing question, and it can
//! never move to a different question afterwards.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a tutor over the API and return its id.
async fn create_tutor(pool: &PgPool, suffix: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tutors",
        serde_json::json!({
            "full_name": format!("Tutor {suffix}"),
            "email": format!("tutor_{suffix}@example.com"),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a question over the API and return its id.
async fn create_question(pool: &PgPool, text: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({ "question_text": text }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an answer over the API and return its id.
async fn create_answer(pool: &PgPool, question_id: i64, text: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/answers",
        serde_json::json!({ "answer_text": text, "question_id": question_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: create returns 201 and writes version 1
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_answer_writes_first_version(pool: PgPool) {
    let question_id = create_question(&pool, "Host question").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/answers",
        serde_json::json!({ "answer_text": "It depends.", "question_id": question_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["answer_text"], "It depends.");
    assert_eq!(json["data"]["question_id"], question_id);
    assert_eq!(json["data"]["is_edited"], false);
    let id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/answers/{id}/versions")).await;
    let versions = body_json(response).await;
    let data = versions["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["version_number"], 1);
    assert_eq!(data[0]["question_id"], question_id);
}

// ---------------------------------------------------------------------------
// Test: creating an answer for a missing question is a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_answer_missing_question_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/answers",
        serde_json::json!({ "answer_text": "Orphan", "question_id": 999999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: blank answer text is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_answer_blank_text_rejected(pool: PgPool) {
    let question_id = create_question(&pool, "Host").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/answers",
        serde_json::json!({ "answer_text": "", "question_id": question_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: update appends a version and cannot re-parent the answer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_answer_keeps_question(pool: PgPool) {
    let question_id = create_question(&pool, "Original host").await;
    let other_question_id = create_question(&pool, "Other host").await;
    let id = create_answer(&pool, question_id, "Take one").await;

    // A question_id in the payload is ignored: answers never move.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/answers/{id}"),
        serde_json::json!({
            "answer_text": "Take two",
            "tutor_id": null,
            "question_id": other_question_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["answer_text"], "Take two");
    assert_eq!(json["data"]["is_edited"], true);
    assert_eq!(
        json["data"]["question_id"], question_id,
        "update must not move the answer to another question"
    );

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/answers/{id}/versions")).await;
    let versions = body_json(response).await;
    let data = versions["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["version_number"], 2);
    assert_eq!(data[1]["answer_text"], "Take two");
    assert_eq!(data[1]["question_id"], question_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_answer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/answers/999999",
        serde_json::json!({ "answer_text": "Ghost", "tutor_id": null }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: delete marks the answer history with the acting tutor
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_answer_marks_history(pool: PgPool) {
    let tutor_id = create_tutor(&pool, "adel").await;
    let question_id = create_question(&pool, "Host").await;
    let id = create_answer(&pool, question_id, "Short lived").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/answers/{id}?deleted_by={tutor_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/answers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/answers/{id}/versions")).await;
    let versions = body_json(response).await;
    let data = versions["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["is_deleted"], true);
    assert_eq!(data[0]["deleted_by"], tutor_id);
}

// ---------------------------------------------------------------------------
// Test: list answers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_answers(pool: PgPool) {
    let question_id = create_question(&pool, "Host").await;
    create_answer(&pool, question_id, "A1").await;
    create_answer(&pool, question_id, "A2").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/answers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["answer_text"], "A1");
    assert_eq!(data[1]["answer_text"], "A2");
}
