//! Repository for the `questions_tags` association table.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::models::tag::QuestionTag;

/// Provides attach/detach and listing for question-tag associations.
pub struct QuestionTagRepo;

impl QuestionTagRepo {
    /// Attach a tag to a question. Returns `true` if the association was
    /// newly created, `false` if it already existed.
    pub async fn attach(
        pool: &PgPool,
        question_id: DbId,
        tag_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO questions_tags (question_id, tag_id) VALUES ($1, $2) \
             ON CONFLICT (question_id, tag_id) DO NOTHING",
        )
        .bind(question_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Detach a tag from a question. Returns `true` if a row was removed.
    pub async fn detach(
        pool: &PgPool,
        question_id: DbId,
        tag_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM questions_tags WHERE question_id = $1 AND tag_id = $2")
                .bind(question_id)
                .bind(tag_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every association, ordered by question then tag.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<QuestionTag>, sqlx::Error> {
        sqlx::query_as::<_, QuestionTag>(
            "SELECT question_id, tag_id FROM questions_tags ORDER BY question_id, tag_id",
        )
        .fetch_all(pool)
        .await
    }

    /// List associations for one tag, ordered by question.
    pub async fn list_by_tag(pool: &PgPool, tag_id: DbId) -> Result<Vec<QuestionTag>, sqlx::Error> {
        sqlx::query_as::<_, QuestionTag>(
            "SELECT question_id, tag_id FROM questions_tags WHERE tag_id = $1 ORDER BY question_id",
        )
        .bind(tag_id)
        .fetch_all(pool)
        .await
    }
}
