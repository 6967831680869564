//! Handlers for tag CRUD and tag-scoped lookups.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::types::DbId;
use kb_core::validate::validate_tag_name;
use kb_db::models::tag::CreateTag;
use kb_db::repositories::{QuestionTagRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tags
///
/// List all tags, ordered by name.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// POST /tags
///
/// Create a new tag. Tag names are unique.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    validate_tag_name(&input.name).map_err(AppError::Core)?;

    let tag = TagRepo::create(&state.pool, &input).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// GET /tags/{id}
///
/// Fetch a single tag.
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;
    Ok(Json(DataResponse { data: tag }))
}

/// GET /tags/name/{name}
///
/// Fetch a single tag by name, ignoring case and surrounding whitespace.
pub async fn get_tag_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag '{name}' not found")))?;
    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /tags/{id}
///
/// Delete a tag. Its question associations are removed by cascade.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }

    tracing::info!(tag_id = id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /tags/{id}/questions
///
/// List the question associations for one tag.
pub async fn list_tag_questions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;

    let relations = QuestionTagRepo::list_by_tag(&state.pool, id).await?;
    Ok(Json(DataResponse { data: relations }))
}
