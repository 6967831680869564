//! Route definitions for answers and their version history.

use axum::routing::get;
use axum::Router;

use crate::handlers::answer;
use crate::state::AppState;

/// Answer routes mounted at `/answers`.
///
/// ```text
/// GET    /                     -> list_answers
/// POST   /                     -> create_answer (writes version 1)
/// GET    /{id}                 -> get_answer
/// PUT    /{id}                 -> update_answer (appends a version)
/// DELETE /{id}?deleted_by={t}  -> delete_answer (marks history deleted)
/// GET    /{id}/versions        -> list_versions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(answer::list_answers).post(answer::create_answer))
        .route(
            "/{id}",
            get(answer::get_answer)
                .put(answer::update_answer)
                .delete(answer::delete_answer),
        )
        .route("/{id}/versions", get(answer::list_versions))
}
