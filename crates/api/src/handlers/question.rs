//! Handlers for question CRUD and version history.
//!
//! Create writes version 1, update appends the next version, and delete
//! removes the current row while marking the whole history deleted with the
//! acting tutor. The version listing deliberately skips the existence check:
//! a deleted question's history must stay readable.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::types::DbId;
use kb_core::validate::validate_question_text;
use kb_db::models::question::{CreateQuestion, UpdateQuestion};
use kb_db::repositories::{QuestionRepo, QuestionVersionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Query param types
-------------------------------------------------------------------------- */

/// Attribution for versioned deletes: the tutor performing the removal.
#[derive(Debug, serde::Deserialize)]
pub struct DeleteParams {
    pub deleted_by: DbId,
}

/* --------------------------------------------------------------------------
Question CRUD
-------------------------------------------------------------------------- */

/// GET /questions
///
/// List all questions.
pub async fn list_questions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /questions
///
/// Create a new question. Version 1 is written in the same transaction.
pub async fn create_question(
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    validate_question_text(&input.question_text).map_err(AppError::Core)?;

    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(question_id = question.id, "Question created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// GET /questions/{id}
///
/// Fetch a single question.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;
    Ok(Json(DataResponse { data: question }))
}

/// PUT /questions/{id}
///
/// Replace the question's content, mark it edited, and append the next
/// version snapshot.
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    validate_question_text(&input.question_text).map_err(AppError::Core)?;

    let question = QuestionRepo::update(&state.pool, id, &input).await?;

    tracing::info!(question_id = id, "Question updated");

    Ok(Json(DataResponse { data: question }))
}

/// DELETE /questions/{id}?deleted_by={tutor_id}
///
/// Delete a question and mark its whole version history as deleted by the
/// given tutor. Questions with remaining answers cannot be deleted.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let marked = QuestionRepo::delete(&state.pool, id, params.deleted_by).await?;

    tracing::info!(
        question_id = id,
        deleted_by = params.deleted_by,
        versions_marked = marked,
        "Question deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
Versions
-------------------------------------------------------------------------- */

/// GET /questions/{id}/versions
///
/// List the full version history, oldest first. Also serves histories of
/// deleted questions, so no existence check here.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let versions = QuestionVersionRepo::list_by_question(&state.pool, id).await?;
    Ok(Json(DataResponse { data: versions }))
}
