//! Tutor model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kb_core::types::DbId;

/// A row from the `tutors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tutor {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
}

/// DTO for creating a new tutor.
#[derive(Debug, Deserialize)]
pub struct CreateTutor {
    pub full_name: String,
    pub email: String,
}

/// DTO for updating a tutor. Both fields are replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateTutor {
    pub full_name: String,
    pub email: String,
}
