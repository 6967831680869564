//! Repository for the `questions` table.
//!
//! Every write runs in a transaction together with its version ledger entry.
//! The UPDATE/DELETE on the entity row comes first and takes the row lock,
//! which serializes concurrent writers on the same question; the unique
//! `(question_id, version_number)` constraint backstops the ledger.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::question::{CreateQuestion, Question, UpdateQuestion};
use crate::repositories::question_version_repo::QuestionVersionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question_text, tutor_id, created_at, is_edited";

const ENTITY: &str = "Question";

/// Provides CRUD operations for questions, keeping the version ledger in sync.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question and write version 1 in the same transaction.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> DbResult<Question> {
        let mut tx = pool.begin().await.map_err(DbError::Write)?;

        let query = format!(
            "INSERT INTO questions (question_text, tutor_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(&input.question_text)
            .bind(input.tutor_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(DbError::Write)?;

        let version = QuestionVersionRepo::next_version_number(&mut tx, question.id)
            .await
            .map_err(DbError::Read)?;
        QuestionVersionRepo::append(
            &mut tx,
            question.id,
            &question.question_text,
            question.tutor_id,
            version,
        )
        .await
        .map_err(|source| DbError::PartialCreate {
            entity: ENTITY,
            id: question.id,
            source,
        })?;

        tx.commit().await.map_err(DbError::Write)?;
        Ok(question)
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all questions, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Replace a question's content and append the next version snapshot.
    ///
    /// Marks the question as edited. The version number is computed from the
    /// highest persisted snapshot after the row lock is held, so concurrent
    /// updates cannot produce duplicates.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateQuestion) -> DbResult<Question> {
        let mut tx = pool.begin().await.map_err(DbError::Write)?;

        let query = format!(
            "UPDATE questions SET question_text = $1, tutor_id = $2, is_edited = true
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(&input.question_text)
            .bind(input.tutor_id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(DbError::Write)?
            .ok_or(DbError::NotFound { entity: ENTITY, id })?;

        let latest = QuestionVersionRepo::latest_version_number(&mut tx, id)
            .await
            .map_err(DbError::Read)?
            .ok_or(DbError::VersionHistoryCorrupt { entity: ENTITY, id })?;
        QuestionVersionRepo::append(
            &mut tx,
            question.id,
            &question.question_text,
            question.tutor_id,
            latest + 1,
        )
        .await
        .map_err(DbError::Write)?;

        tx.commit().await.map_err(DbError::Write)?;
        Ok(question)
    }

    /// Delete a question and mark its whole version history as deleted,
    /// recording who deleted it. Returns the number of versions marked.
    ///
    /// Fails with a write error while answers still reference the question.
    pub async fn delete(pool: &PgPool, id: DbId, deleted_by: DbId) -> DbResult<u64> {
        let mut tx = pool.begin().await.map_err(DbError::Write)?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::Write)?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }

        let marked = QuestionVersionRepo::mark_all_deleted(&mut tx, id, deleted_by)
            .await
            .map_err(DbError::Write)?;

        tx.commit().await.map_err(DbError::Write)?;
        Ok(marked)
    }
}
