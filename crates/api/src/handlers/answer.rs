//! Handlers for answer CRUD and version history.
//!
//! Mirrors the question handlers. Creation checks that the target question
//! exists so clients get a 404 instead of a constraint violation; updates
//! can never move an answer to a different question.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::types::DbId;
use kb_core::validate::validate_answer_text;
use kb_db::models::answer::{CreateAnswer, UpdateAnswer};
use kb_db::repositories::{AnswerRepo, AnswerVersionRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::question::DeleteParams;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Answer CRUD
-------------------------------------------------------------------------- */

/// GET /answers
///
/// List all answers.
pub async fn list_answers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let answers = AnswerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// POST /answers
///
/// Create a new answer to an existing question. Version 1 is written in the
/// same transaction.
pub async fn create_answer(
    State(state): State<AppState>,
    Json(input): Json<CreateAnswer>,
) -> AppResult<impl IntoResponse> {
    validate_answer_text(&input.answer_text).map_err(AppError::Core)?;

    QuestionRepo::find_by_id(&state.pool, input.question_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: input.question_id,
        }))?;

    let answer = AnswerRepo::create(&state.pool, &input).await?;

    tracing::info!(
        answer_id = answer.id,
        question_id = answer.question_id,
        "Answer created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

/// GET /answers/{id}
///
/// Fetch a single answer.
pub async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;
    Ok(Json(DataResponse { data: answer }))
}

/// PUT /answers/{id}
///
/// Replace the answer's content, mark it edited, and append the next
/// version snapshot. The owning question stays the same.
pub async fn update_answer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnswer>,
) -> AppResult<impl IntoResponse> {
    validate_answer_text(&input.answer_text).map_err(AppError::Core)?;

    let answer = AnswerRepo::update(&state.pool, id, &input).await?;

    tracing::info!(answer_id = id, "Answer updated");

    Ok(Json(DataResponse { data: answer }))
}

/// DELETE /answers/{id}?deleted_by={tutor_id}
///
/// Delete an answer and mark its whole version history as deleted by the
/// given tutor.
pub async fn delete_answer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let marked = AnswerRepo::delete(&state.pool, id, params.deleted_by).await?;

    tracing::info!(
        answer_id = id,
        deleted_by = params.deleted_by,
        versions_marked = marked,
        "Answer deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
Versions
-------------------------------------------------------------------------- */

/// GET /answers/{id}/versions
///
/// List the full version history, oldest first. Also serves histories of
/// deleted answers, so no existence check here.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let versions = AnswerVersionRepo::list_by_answer(&state.pool, id).await?;
    Ok(Json(DataResponse { data: versions }))
}
