//! Tag and question-tag association models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kb_core::types::DbId;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub tutor_id: Option<DbId>,
}

/// DTO for creating a new tag.
#[derive(Debug, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub tutor_id: Option<DbId>,
}

/// A row from the `questions_tags` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionTag {
    pub question_id: DbId,
    pub tag_id: DbId,
}
