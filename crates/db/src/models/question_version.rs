//! Question version model.
//!
//! Versions are append-only snapshots of question content, written on
//! creation and on every edit. They carry no foreign keys so the history
//! survives deletion of the question itself.

use serde::Serialize;
use sqlx::FromRow;

use kb_core::types::{DbId, Timestamp};

/// A row from the `question_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionVersion {
    pub id: DbId,
    pub question_id: DbId,
    pub question_text: String,
    pub tutor_id: Option<DbId>,
    pub created_at: Timestamp,
    pub version_number: i32,
    pub is_deleted: bool,
    pub deleted_by: Option<DbId>,
}
