//! Answer model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kb_core::types::{DbId, Timestamp};

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub answer_text: String,
    pub tutor_id: Option<DbId>,
    pub question_id: DbId,
    pub created_at: Timestamp,
    pub is_edited: bool,
}

/// DTO for creating a new answer.
#[derive(Debug, Deserialize)]
pub struct CreateAnswer {
    pub answer_text: String,
    pub tutor_id: Option<DbId>,
    pub question_id: DbId,
}

/// DTO for updating an answer. An answer can never move to another question,
/// so `question_id` is absent here.
#[derive(Debug, Deserialize)]
pub struct UpdateAnswer {
    pub answer_text: String,
    pub tutor_id: Option<DbId>,
}
