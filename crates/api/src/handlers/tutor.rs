//! Handlers for tutor CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::types::DbId;
use kb_core::validate::{validate_tutor_email, validate_tutor_name};
use kb_db::models::tutor::{CreateTutor, UpdateTutor};
use kb_db::repositories::TutorRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tutors
///
/// List all tutors.
pub async fn list_tutors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tutors = TutorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tutors }))
}

/// POST /tutors
///
/// Create a new tutor. Emails are unique.
pub async fn create_tutor(
    State(state): State<AppState>,
    Json(input): Json<CreateTutor>,
) -> AppResult<impl IntoResponse> {
    validate_tutor_name(&input.full_name).map_err(AppError::Core)?;
    validate_tutor_email(&input.email).map_err(AppError::Core)?;

    let tutor = TutorRepo::create(&state.pool, &input).await?;

    tracing::info!(tutor_id = tutor.id, "Tutor created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tutor })))
}

/// GET /tutors/{id}
///
/// Fetch a single tutor.
pub async fn get_tutor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tutor = TutorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tutor", id }))?;
    Ok(Json(DataResponse { data: tutor }))
}

/// PUT /tutors/{id}
///
/// Replace a tutor's name and email.
pub async fn update_tutor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTutor>,
) -> AppResult<impl IntoResponse> {
    validate_tutor_name(&input.full_name).map_err(AppError::Core)?;
    validate_tutor_email(&input.email).map_err(AppError::Core)?;

    let tutor = TutorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tutor", id }))?;

    tracing::info!(tutor_id = id, "Tutor updated");

    Ok(Json(DataResponse { data: tutor }))
}

/// DELETE /tutors/{id}
///
/// Delete a tutor. Questions, answers, and tags they authored stay behind
/// with their tutor reference cleared.
pub async fn delete_tutor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TutorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tutor", id }));
    }

    tracing::info!(tutor_id = id, "Tutor deleted");

    Ok(StatusCode::NO_CONTENT)
}
