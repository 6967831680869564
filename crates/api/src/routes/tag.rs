//! Route definitions for tags.

use axum::routing::get;
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// Tag routes mounted at `/tags`.
///
/// ```text
/// GET    /                  -> list_tags
/// POST   /                  -> create_tag
/// GET    /{id}              -> get_tag
/// DELETE /{id}              -> delete_tag
/// GET    /name/{name}       -> get_tag_by_name
/// GET    /{id}/questions    -> list_tag_questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tag::list_tags).post(tag::create_tag))
        .route("/{id}", get(tag::get_tag).delete(tag::delete_tag))
        .route("/name/{name}", get(tag::get_tag_by_name))
        .route("/{id}/questions", get(tag::list_tag_questions))
}
