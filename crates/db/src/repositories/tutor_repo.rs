//! Repository for the `tutors` table.

use sqlx::PgPool;

use kb_core::types::DbId;

use crate::models::tutor::{CreateTutor, Tutor, UpdateTutor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email";

/// Provides CRUD operations for tutors.
pub struct TutorRepo;

impl TutorRepo {
    /// Insert a new tutor.
    pub async fn create(pool: &PgPool, input: &CreateTutor) -> Result<Tutor, sqlx::Error> {
        let query = format!(
            "INSERT INTO tutors (full_name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutor>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a tutor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tutor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutors WHERE id = $1");
        sqlx::query_as::<_, Tutor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tutors, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tutor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutors ORDER BY id");
        sqlx::query_as::<_, Tutor>(&query).fetch_all(pool).await
    }

    /// Replace a tutor's name and email.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTutor,
    ) -> Result<Option<Tutor>, sqlx::Error> {
        let query = format!(
            "UPDATE tutors SET full_name = $1, email = $2
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutor>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tutor by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tutors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
