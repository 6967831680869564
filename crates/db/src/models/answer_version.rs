//! Answer version model.
//!
//! Same shape as question versions, plus a denormalized `question_id` so the
//! history records which question the answer belonged to at each edit.

use serde::Serialize;
use sqlx::FromRow;

use kb_core::types::{DbId, Timestamp};

/// A row from the `answer_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerVersion {
    pub id: DbId,
    pub answer_id: DbId,
    pub answer_text: String,
    pub question_id: DbId,
    pub tutor_id: Option<DbId>,
    pub created_at: Timestamp,
    pub version_number: i32,
    pub is_deleted: bool,
    pub deleted_by: Option<DbId>,
}
