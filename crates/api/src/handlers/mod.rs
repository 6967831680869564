//! Request handlers for the knowledge base API.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers validate input via `kb_core`, delegate to the corresponding
//! repository in `kb_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod answer;
pub mod question;
pub mod question_tag;
pub mod search;
pub mod tag;
pub mod tutor;
