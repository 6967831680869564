//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-replace updates

pub mod answer;
pub mod answer_version;
pub mod question;
pub mod question_version;
pub mod tag;
pub mod tutor;
