use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use storage::{
    TrackerService,
    dto::common::ActionResult,
    dto::progress::{LogProgressRequest, UpdateProgressRequest},
    models::ProgressEntry,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::session::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises/{id}/progress",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    responses(
        (status = 200, description = "Progress entries ascending by date; empty when not authenticated", body = Vec<ProgressEntry>)
    ),
    tag = "progress"
)]
pub async fn list_progress(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let entries = services::list_progress(&tracker, user.id(), &id).await;

    Json(entries).into_response()
}

#[utoipa::path(
    post,
    path = "/api/exercises/{id}/progress",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    request_body = LogProgressRequest,
    responses(
        (status = 200, description = "Outcome of the log action", body = ActionResult),
        (status = 400, description = "Validation error")
    ),
    tag = "progress"
)]
pub async fn log_progress(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<LogProgressRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let result = services::log_progress(&tracker, user.id(), &id, &req).await;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    put,
    path = "/api/exercises/{id}/progress/{date}",
    params(
        ("id" = String, Path, description = "Exercise id"),
        ("date" = String, Path, description = "Entry date, YYYY-MM-DD")
    ),
    request_body = UpdateProgressRequest,
    responses(
        (status = 200, description = "Outcome of the update action", body = ActionResult),
        (status = 400, description = "Validation error")
    ),
    tag = "progress"
)]
pub async fn update_progress(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
    Path((id, date)): Path<(String, String)>,
    Json(req): Json<UpdateProgressRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let date: NaiveDate = date
        .parse()
        .map_err(|_| WebError::BadRequest("Date must be YYYY-MM-DD".to_string()))?;

    let result = services::update_progress(&tracker, user.id(), &id, date, &req).await;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/recent",
    responses(
        (status = 200, description = "The latest-dated session across all exercises; null when there is none", body = ProgressEntry)
    ),
    tag = "progress"
)]
pub async fn most_recent_workout(
    State(tracker): State<TrackerService>,
    user: CurrentUser,
) -> Response {
    let entry = services::most_recent_workout(&tracker, user.id()).await;

    Json(entry).into_response()
}
