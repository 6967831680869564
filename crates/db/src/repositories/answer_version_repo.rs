//! Repository for the `answer_versions` ledger.
//!
//! Mirrors `QuestionVersionRepo`: writes run inside the caller's transaction,
//! reads go through the pool. Snapshots additionally record the owning
//! question id at the time of the edit.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::models::answer_version::AnswerVersion;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, answer_id, answer_text, question_id, tutor_id, created_at, \
    version_number, is_deleted, deleted_by";

/// Provides append and read operations for answer version snapshots.
pub struct AnswerVersionRepo;

impl AnswerVersionRepo {
    /// Get the next version number for an answer (max existing + 1, or 1 if none).
    pub async fn next_version_number(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        answer_id: DbId,
    ) -> Result<i32, sqlx::Error> {
        let row: (i32,) = sqlx::query_as(
            "SELECT COALESCE(MAX(version_number), 0) + 1 \
             FROM answer_versions WHERE answer_id = $1",
        )
        .bind(answer_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row.0)
    }

    /// Get the highest persisted version number for an answer, or `None` if
    /// the answer has no version rows at all.
    pub async fn latest_version_number(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        answer_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: (Option<i32>,) =
            sqlx::query_as("SELECT MAX(version_number) FROM answer_versions WHERE answer_id = $1")
                .bind(answer_id)
                .fetch_one(&mut **tx)
                .await?;
        Ok(row.0)
    }

    /// Append a new version snapshot within the caller's transaction.
    pub async fn append(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        answer_id: DbId,
        answer_text: &str,
        question_id: DbId,
        tutor_id: Option<DbId>,
        version_number: i32,
    ) -> Result<AnswerVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO answer_versions (answer_id, answer_text, question_id, tutor_id, version_number)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnswerVersion>(&query)
            .bind(answer_id)
            .bind(answer_text)
            .bind(question_id)
            .bind(tutor_id)
            .bind(version_number)
            .fetch_one(&mut **tx)
            .await
    }

    /// Mark every version of an answer as deleted, recording who deleted it.
    /// Returns the number of rows marked. Idempotent.
    pub async fn mark_all_deleted(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        answer_id: DbId,
        deleted_by: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE answer_versions SET is_deleted = true, deleted_by = $2 \
             WHERE answer_id = $1",
        )
        .bind(answer_id)
        .bind(deleted_by)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected())
    }

    /// List all versions for an answer, oldest first. Returns an empty list
    /// for unknown ids; the history remains readable after the answer row
    /// is deleted.
    pub async fn list_by_answer(
        pool: &PgPool,
        answer_id: DbId,
    ) -> Result<Vec<AnswerVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answer_versions
             WHERE answer_id = $1
             ORDER BY version_number ASC"
        );
        sqlx::query_as::<_, AnswerVersion>(&query)
            .bind(answer_id)
            .fetch_all(pool)
            .await
    }
}
