pub mod answer;
pub mod health;
pub mod question;
pub mod tag;
pub mod tutor;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tutors                              list, create
/// /tutors/{id}                         get, update, delete
///
/// /questions                           list, create (writes version 1)
/// /questions/{id}                      get, update (appends version), delete (?deleted_by=)
/// /questions/{id}/versions             full version history
/// /questions/{id}/tags/{tag_id}        attach, detach tag
///
/// /answers                             list, create (writes version 1)
/// /answers/{id}                        get, update (appends version), delete (?deleted_by=)
/// /answers/{id}/versions               full version history
///
/// /tags                                list, create
/// /tags/{id}                           get, delete
/// /tags/name/{name}                    get by name
/// /tags/{id}/questions                 associations for one tag
///
/// /question-tags                       all question-tag associations
/// /search?tag={name}                   questions carrying a tag, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tutors", tutor::router())
        .nest("/questions", question::router())
        .nest("/answers", answer::router())
        .nest("/tags", tag::router())
        .route("/question-tags", get(handlers::question_tag::list_relations))
        .route("/search", get(handlers::search::questions_by_tag))
}
