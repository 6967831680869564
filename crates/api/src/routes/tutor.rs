//! Route definitions for tutors.

use axum::routing::get;
use axum::Router;

use crate::handlers::tutor;
use crate::state::AppState;

/// Tutor routes mounted at `/tutors`.
///
/// ```text
/// GET    /            -> list_tutors
/// POST   /            -> create_tutor
/// GET    /{id}        -> get_tutor
/// PUT    /{id}        -> update_tutor
/// DELETE /{id}        -> delete_tutor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tutor::list_tutors).post(tutor::create_tutor))
        .route(
            "/{id}",
            get(tutor::get_tutor)
                .put(tutor::update_tutor)
                .delete(tutor::delete_tutor),
        )
}
