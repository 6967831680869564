//! Repository for the `question_versions` ledger.
//!
//! Write operations run inside the caller's transaction so a snapshot always
//! commits together with the entity write that produced it. Reads go through
//! the pool directly.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::models::question_version::QuestionVersion;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, question_id, question_text, tutor_id, created_at, version_number, is_deleted, deleted_by";

/// Provides append and read operations for question version snapshots.
pub struct QuestionVersionRepo;

impl QuestionVersionRepo {
    /// Get the next version number for a question (max existing + 1, or 1 if none).
    pub async fn next_version_number(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_id: DbId,
    ) -> Result<i32, sqlx::Error> {
        let row: (i32,) = sqlx::query_as(
            "SELECT COALESCE(MAX(version_number), 0) + 1 \
             FROM question_versions WHERE question_id = $1",
        )
        .bind(question_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row.0)
    }

    /// Get the highest persisted version number for a question, or `None` if
    /// the question has no version rows at all.
    pub async fn latest_version_number(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: (Option<i32>,) =
            sqlx::query_as("SELECT MAX(version_number) FROM question_versions WHERE question_id = $1")
                .bind(question_id)
                .fetch_one(&mut **tx)
                .await?;
        Ok(row.0)
    }

    /// Append a new version snapshot within the caller's transaction.
    pub async fn append(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_id: DbId,
        question_text: &str,
        tutor_id: Option<DbId>,
        version_number: i32,
    ) -> Result<QuestionVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO question_versions (question_id, question_text, tutor_id, version_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestionVersion>(&query)
            .bind(question_id)
            .bind(question_text)
            .bind(tutor_id)
            .bind(version_number)
            .fetch_one(&mut **tx)
            .await
    }

    /// Mark every version of a question as deleted, recording who deleted it.
    /// Returns the number of rows marked. Idempotent.
    pub async fn mark_all_deleted(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_id: DbId,
        deleted_by: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE question_versions SET is_deleted = true, deleted_by = $2 \
             WHERE question_id = $1",
        )
        .bind(question_id)
        .bind(deleted_by)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected())
    }

    /// List all versions for a question, oldest first. Returns an empty list
    /// for unknown ids; the history remains readable after the question row
    /// is deleted.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<QuestionVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM question_versions
             WHERE question_id = $1
             ORDER BY version_number ASC"
        );
        sqlx::query_as::<_, QuestionVersion>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }
}
