//! Question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kb_core::types::{DbId, Timestamp};

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question_text: String,
    pub tutor_id: Option<DbId>,
    pub created_at: Timestamp,
    pub is_edited: bool,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub question_text: String,
    pub tutor_id: Option<DbId>,
}

/// DTO for updating a question. Both fields are replaced; `is_edited` is set
/// by the server and cannot be supplied by clients.
#[derive(Debug, Deserialize)]
pub struct UpdateQuestion {
    pub question_text: String,
    pub tutor_id: Option<DbId>,
}
