//! Repository for the `answers` table.
//!
//! Same transactional shape as `QuestionRepo`: the entity write comes first
//! and takes the row lock, then the version ledger entry is appended, and
//! both commit together.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::answer::{Answer, CreateAnswer, UpdateAnswer};
use crate::repositories::answer_version_repo::AnswerVersionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, answer_text, tutor_id, question_id, created_at, is_edited";

const ENTITY: &str = "Answer";

/// Provides CRUD operations for answers, keeping the version ledger in sync.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer and write version 1 in the same transaction.
    pub async fn create(pool: &PgPool, input: &CreateAnswer) -> DbResult<Answer> {
        let mut tx = pool.begin().await.map_err(DbError::Write)?;

        let query = format!(
            "INSERT INTO answers (answer_text, tutor_id, question_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(&input.answer_text)
            .bind(input.tutor_id)
            .bind(input.question_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(DbError::Write)?;

        let version = AnswerVersionRepo::next_version_number(&mut tx, answer.id)
            .await
            .map_err(DbError::Read)?;
        AnswerVersionRepo::append(
            &mut tx,
            answer.id,
            &answer.answer_text,
            answer.question_id,
            answer.tutor_id,
            version,
        )
        .await
        .map_err(|source| DbError::PartialCreate {
            entity: ENTITY,
            id: answer.id,
            source,
        })?;

        tx.commit().await.map_err(DbError::Write)?;
        Ok(answer)
    }

    /// Find an answer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all answers, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers ORDER BY id");
        sqlx::query_as::<_, Answer>(&query).fetch_all(pool).await
    }

    /// Replace an answer's content and append the next version snapshot.
    ///
    /// Marks the answer as edited. `question_id` is left untouched.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateAnswer) -> DbResult<Answer> {
        let mut tx = pool.begin().await.map_err(DbError::Write)?;

        let query = format!(
            "UPDATE answers SET answer_text = $1, tutor_id = $2, is_edited = true
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(&input.answer_text)
            .bind(input.tutor_id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(DbError::Write)?
            .ok_or(DbError::NotFound { entity: ENTITY, id })?;

        let latest = AnswerVersionRepo::latest_version_number(&mut tx, id)
            .await
            .map_err(DbError::Read)?
            .ok_or(DbError::VersionHistoryCorrupt { entity: ENTITY, id })?;
        AnswerVersionRepo::append(
            &mut tx,
            answer.id,
            &answer.answer_text,
            answer.question_id,
            answer.tutor_id,
            latest + 1,
        )
        .await
        .map_err(DbError::Write)?;

        tx.commit().await.map_err(DbError::Write)?;
        Ok(answer)
    }

    /// Delete an answer and mark its whole version history as deleted,
    /// recording who deleted it. Returns the number of versions marked.
    pub async fn delete(pool: &PgPool, id: DbId, deleted_by: DbId) -> DbResult<u64> {
        let mut tx = pool.begin().await.map_err(DbError::Write)?;

        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::Write)?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }

        let marked = AnswerVersionRepo::mark_all_deleted(&mut tx, id, deleted_by)
            .await
            .map_err(DbError::Write)?;

        tx.commit().await.map_err(DbError::Write)?;
        Ok(marked)
    }
}
