//! Tag-based question search.

use sqlx::PgPool;

use crate::models::question::Question;

/// Provides the tag-name search over questions.
pub struct SearchRepo;

impl SearchRepo {
    /// Find all questions carrying a tag with the given name, newest first.
    /// The match ignores case and surrounding whitespace.
    pub async fn questions_by_tag(
        pool: &PgPool,
        tag_name: &str,
    ) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT q.id, q.question_text, q.tutor_id, q.created_at, q.is_edited
             FROM questions q
             JOIN questions_tags qt ON q.id = qt.question_id
             JOIN tags t ON qt.tag_id = t.id
             WHERE lower(trim(t.name)) = lower(trim($1))
             ORDER BY q.created_at DESC",
        )
        .bind(tag_name)
        .fetch_all(pool)
        .await
    }
}
