//! Handler for tag-based question search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use kb_db::models::question::Question;
use kb_db::repositories::SearchRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct SearchParams {
    pub tag: Option<String>,
}

/// GET /search?tag={name}
///
/// List all questions carrying the named tag, newest first. A missing or
/// blank tag name yields an empty result rather than an error.
pub async fn questions_by_tag(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let questions: Vec<Question> = match params.tag.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            SearchRepo::questions_by_tag(&state.pool, name).await?
        }
        _ => Vec::new(),
    };

    Ok(Json(DataResponse { data: questions }))
}
