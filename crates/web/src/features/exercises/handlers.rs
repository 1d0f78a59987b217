use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    TrackerService,
    dto::exercise::{CreateExerciseRequest, CreateExerciseResult},
    models::Exercise,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::session::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises",
    responses(
        (status = 200, description = "All of the user's exercises; empty when not authenticated", body = Vec<Exercise>)
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
) -> Response {
    let exercises = services::list_exercises(&tracker, user.id()).await;

    Json(exercises).into_response()
}

#[utoipa::path(
    get,
    path = "/api/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    responses(
        (status = 200, description = "Exercise found", body = Exercise),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let exercise = services::get_exercise(&tracker, user.id(), &id)
        .await
        .ok_or(WebError::NotFound)?;

    Ok(Json(exercise).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = CreateExerciseRequest,
    responses(
        (status = 200, description = "Outcome of the create action", body = CreateExerciseResult),
        (status = 400, description = "Validation error")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
    Json(req): Json<CreateExerciseRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let result = services::create_exercise(&tracker, user.id(), &req).await;

    Ok(Json(result).into_response())
}
