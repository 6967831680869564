//! Handlers for question-tag associations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::types::DbId;
use kb_db::models::tag::QuestionTag;
use kb_db::repositories::{QuestionRepo, QuestionTagRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /questions/{id}/tags/{tag_id}
///
/// Attach a tag to a question. Idempotent: attaching an already-attached
/// tag succeeds without creating a duplicate.
pub async fn attach_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;
    TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;

    let attached = QuestionTagRepo::attach(&state.pool, id, tag_id).await?;
    if attached {
        tracing::info!(question_id = id, tag_id = tag_id, "Tag attached to question");
    }

    let relation = QuestionTag {
        question_id: id,
        tag_id,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: relation })))
}

/// DELETE /questions/{id}/tags/{tag_id}
///
/// Detach a tag from a question.
pub async fn detach_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let detached = QuestionTagRepo::detach(&state.pool, id, tag_id).await?;
    if !detached {
        return Err(AppError::NotFound(format!(
            "Question {id} is not tagged with tag {tag_id}"
        )));
    }

    tracing::info!(question_id = id, tag_id = tag_id, "Tag detached from question");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /question-tags
///
/// List every question-tag association.
pub async fn list_relations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let relations = QuestionTagRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: relations }))
}
