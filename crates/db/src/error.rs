//! Errors returned by the versioned write paths.
//!
//! Plain reads and collaborator repositories return `sqlx::Error` directly;
//! only `QuestionRepo` and `AnswerRepo` write operations use [`DbError`], so
//! callers can distinguish a missing row from a broken version history.

use kb_core::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The entity row was written but its first version snapshot failed.
    /// The surrounding transaction is rolled back, so nothing persists.
    #[error("{entity} {id} created but version 1 could not be written: {source}")]
    PartialCreate {
        entity: &'static str,
        id: DbId,
        #[source]
        source: sqlx::Error,
    },

    /// An entity row exists but has no version rows. Every entity is created
    /// together with version 1, so this indicates out-of-band writes.
    #[error("{entity} {id} has no version history")]
    VersionHistoryCorrupt { entity: &'static str, id: DbId },

    #[error("database read failed: {0}")]
    Read(#[source] sqlx::Error),

    #[error("database write failed: {0}")]
    Write(#[source] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;
