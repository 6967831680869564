//! Route definitions for questions, their version history, and tag attachment.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{question, question_tag};
use crate::state::AppState;

/// Question routes mounted at `/questions`.
///
/// ```text
/// GET    /                     -> list_questions
/// POST   /                     -> create_question (writes version 1)
/// GET    /{id}                 -> get_question
/// PUT    /{id}                 -> update_question (appends a version)
/// DELETE /{id}?deleted_by={t}  -> delete_question (marks history deleted)
/// GET    /{id}/versions        -> list_versions
/// POST   /{id}/tags/{tag_id}   -> attach_tag
/// DELETE /{id}/tags/{tag_id}   -> detach_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/{id}",
            get(question::get_question)
                .put(question::update_question)
                .delete(question::delete_question),
        )
        .route("/{id}/versions", get(question::list_versions))
        .route(
            "/{id}/tags/{tag_id}",
            post(question_tag::attach_tag).delete(question_tag::detach_tag),
        )
}
