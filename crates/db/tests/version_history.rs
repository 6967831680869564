//! Integration tests for the append-only version ledgers.
//!
//! Exercises `QuestionRepo`/`AnswerRepo` together with their version repos
//! against a real database:
//! - Create writes version 1 atomically with the entity row
//! - Update appends the next version and marks the entity edited
//! - Version numbers stay contiguous and per-parent
//! - Update of a missing entity fails without touching the ledger
//! - An entity without history is reported as corrupt, not defaulted
//! - The store rejects duplicate version numbers outright

use assert_matches::assert_matches;
use sqlx::PgPool;

use kb_db::models::answer::{CreateAnswer, UpdateAnswer};
use kb_db::models::question::{CreateQuestion, UpdateQuestion};
use kb_db::models::tutor::CreateTutor;
use kb_db::repositories::{
    AnswerRepo, AnswerVersionRepo, QuestionRepo, QuestionVersionRepo, TutorRepo,
};
use kb_db::DbError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_tutor(suffix: &str) -> CreateTutor {
    CreateTutor {
        full_name: format!("Tutor {suffix}"),
        email: format!("tutor_{suffix}@example.com"),
    }
}

fn new_question(text: &str, tutor_id: Option<i64>) -> CreateQuestion {
    CreateQuestion {
        question_text: text.to_string(),
        tutor_id,
    }
}

fn new_answer(text: &str, question_id: i64, tutor_id: Option<i64>) -> CreateAnswer {
    CreateAnswer {
        answer_text: text.to_string(),
        tutor_id,
        question_id,
    }
}

// ---------------------------------------------------------------------------
// Test: create writes version 1 with the entity's content
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_writes_first_version(pool: PgPool) {
    let tutor = TutorRepo::create(&pool, &new_tutor("qv_create")).await.unwrap();
    let question = QuestionRepo::create(&pool, &new_question("What is borrowing?", Some(tutor.id)))
        .await
        .unwrap();

    assert!(question.id > 0, "id should be auto-generated");
    assert!(!question.is_edited, "new question should not be marked edited");

    let versions = QuestionVersionRepo::list_by_question(&pool, question.id)
        .await
        .unwrap();
    assert_eq!(versions.len(), 1, "create should write exactly one version");
    let v1 = &versions[0];
    assert_eq!(v1.question_id, question.id);
    assert_eq!(v1.question_text, "What is borrowing?");
    assert_eq!(v1.tutor_id, Some(tutor.id));
    assert_eq!(v1.version_number, 1);
    assert!(!v1.is_deleted);
    assert_eq!(v1.deleted_by, None);
}

// ---------------------------------------------------------------------------
// Test: update appends the next version and leaves prior snapshots intact
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_appends_version(pool: PgPool) {
    let question = QuestionRepo::create(&pool, &new_question("Original wording", None))
        .await
        .unwrap();

    let updated = QuestionRepo::update(
        &pool,
        question.id,
        &UpdateQuestion {
            question_text: "Clearer wording".to_string(),
            tutor_id: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.question_text, "Clearer wording");
    assert!(updated.is_edited, "update should mark the question edited");

    let versions = QuestionVersionRepo::list_by_question(&pool, question.id)
        .await
        .unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].version_number, 1);
    assert_eq!(versions[0].question_text, "Original wording");
    assert_eq!(versions[1].version_number, 2);
    assert_eq!(versions[1].question_text, "Clearer wording");
}

// ---------------------------------------------------------------------------
// Test: repeated updates keep version numbers contiguous
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_versions_stay_contiguous(pool: PgPool) {
    let question = QuestionRepo::create(&pool, &new_question("Draft 1", None))
        .await
        .unwrap();

    for n in 2..=4 {
        QuestionRepo::update(
            &pool,
            question.id,
            &UpdateQuestion {
                question_text: format!("Draft {n}"),
                tutor_id: None,
            },
        )
        .await
        .unwrap();
    }

    let versions = QuestionVersionRepo::list_by_question(&pool, question.id)
        .await
        .unwrap();
    let numbers: Vec<i32> = versions.iter().map(|v| v.version_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4], "history should be 1..=4 in order");
}

// ---------------------------------------------------------------------------
// Test: updating one question never touches another question's history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_version_isolation_across_questions(pool: PgPool) {
    let first = QuestionRepo::create(&pool, &new_question("First question", None))
        .await
        .unwrap();
    let second = QuestionRepo::create(&pool, &new_question("Second question", None))
        .await
        .unwrap();

    QuestionRepo::update(
        &pool,
        first.id,
        &UpdateQuestion {
            question_text: "First question, edited".to_string(),
            tutor_id: None,
        },
    )
    .await
    .unwrap();

    let second_versions = QuestionVersionRepo::list_by_question(&pool, second.id)
        .await
        .unwrap();
    assert_eq!(second_versions.len(), 1);
    assert_eq!(second_versions[0].version_number, 1);
    assert_eq!(second_versions[0].question_text, "Second question");
}

// ---------------------------------------------------------------------------
// Test: update of a missing question reports NotFound
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_question_not_found(pool: PgPool) {
    let result = QuestionRepo::update(
        &pool,
        999_999,
        &UpdateQuestion {
            question_text: "Does not matter".to_string(),
            tutor_id: None,
        },
    )
    .await;

    assert_matches!(result, Err(DbError::NotFound { entity: "Question", id: 999_999 }));
}

// ---------------------------------------------------------------------------
// Test: a question without any versions is reported as corrupt on update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_history_detected(pool: PgPool) {
    // Bypass the repo to plant a question with no version rows.
    let row: (i64,) =
        sqlx::query_as("INSERT INTO questions (question_text) VALUES ('orphan') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = QuestionRepo::update(
        &pool,
        row.0,
        &UpdateQuestion {
            question_text: "rewrite".to_string(),
            tutor_id: None,
        },
    )
    .await;

    assert_matches!(result, Err(DbError::VersionHistoryCorrupt { entity: "Question", .. }));

    // The failed update must not have persisted anything.
    let versions = QuestionVersionRepo::list_by_question(&pool, row.0).await.unwrap();
    assert!(versions.is_empty(), "corrupt-history update should write nothing");
}

// ---------------------------------------------------------------------------
// Test: the store rejects a duplicate (question, version_number) pair
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_version_number_rejected(pool: PgPool) {
    let question = QuestionRepo::create(&pool, &new_question("Guarded", None))
        .await
        .unwrap();

    // Version 1 already exists; inserting it again must violate the
    // unique constraint.
    let err = sqlx::query(
        "INSERT INTO question_versions (question_id, question_text, version_number) \
         VALUES ($1, 'dupe', 1)",
    )
    .bind(question.id)
    .execute(&pool)
    .await
    .unwrap_err();

    let db_err = err.into_database_error().expect("should be a database error");
    assert_eq!(
        db_err.constraint(),
        Some("uq_question_versions_parent_version"),
        "duplicate version should hit the unique constraint"
    );
}

// ---------------------------------------------------------------------------
// Test: answer versions mirror question versions and record the question id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answer_versions_record_question(pool: PgPool) {
    let tutor = TutorRepo::create(&pool, &new_tutor("av")).await.unwrap();
    let question = QuestionRepo::create(&pool, &new_question("Host question", None))
        .await
        .unwrap();
    let answer = AnswerRepo::create(
        &pool,
        &new_answer("First attempt", question.id, Some(tutor.id)),
    )
    .await
    .unwrap();

    assert!(!answer.is_edited);

    let updated = AnswerRepo::update(
        &pool,
        answer.id,
        &UpdateAnswer {
            answer_text: "Second attempt".to_string(),
            tutor_id: Some(tutor.id),
        },
    )
    .await
    .unwrap();
    assert!(updated.is_edited);
    assert_eq!(
        updated.question_id, question.id,
        "update must not re-parent the answer"
    );

    let versions = AnswerVersionRepo::list_by_answer(&pool, answer.id).await.unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].version_number, 1);
    assert_eq!(versions[0].answer_text, "First attempt");
    assert_eq!(versions[1].version_number, 2);
    assert_eq!(versions[1].answer_text, "Second attempt");
    for v in &versions {
        assert_eq!(v.question_id, question.id, "each snapshot records its question");
    }
}

// ---------------------------------------------------------------------------
// Test: update of a missing answer reports NotFound
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_answer_not_found(pool: PgPool) {
    let result = AnswerRepo::update(
        &pool,
        424_242,
        &UpdateAnswer {
            answer_text: "ghost".to_string(),
            tutor_id: None,
        },
    )
    .await;

    assert_matches!(result, Err(DbError::NotFound { entity: "Answer", id: 424_242 }));
}
