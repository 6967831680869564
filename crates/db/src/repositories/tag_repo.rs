//! Repository for the `tags` table.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::models::tag::{CreateTag, Tag};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, tutor_id";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag. Tag names are unique.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name, tutor_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.name)
            .bind(input.tutor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a tag by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by name, ignoring case and surrounding whitespace.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tags WHERE lower(trim(name)) = lower(trim($1))"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all tags, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY name");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Delete a tag by ID. Returns `true` if a row was removed.
    /// Associations to questions are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
