use chrono::NaiveDate;
use storage::{
    TrackerService,
    dto::common::ActionResult,
    dto::progress::{LogProgressRequest, UpdateProgressRequest},
    models::ProgressEntry,
};

/// Progress history for one exercise
pub async fn list_progress(
    tracker: &TrackerService,
    user: Option<&str>,
    exercise_id: &str,
) -> Vec<ProgressEntry> {
    tracker.list_progress(user, exercise_id).await
}

/// Log a new session
pub async fn log_progress(
    tracker: &TrackerService,
    user: Option<&str>,
    exercise_id: &str,
    request: &LogProgressRequest,
) -> ActionResult {
    tracker
        .log_progress(user, exercise_id, request.date, &request.sets)
        .await
}

/// Edit an existing session's sets
pub async fn update_progress(
    tracker: &TrackerService,
    user: Option<&str>,
    exercise_id: &str,
    date: NaiveDate,
    request: &UpdateProgressRequest,
) -> ActionResult {
    tracker
        .update_progress(user, exercise_id, date, &request.sets)
        .await
}

/// The user's most recent workout across all exercises
pub async fn most_recent_workout(
    tracker: &TrackerService,
    user: Option<&str>,
) -> Option<ProgressEntry> {
    tracker.most_recent_workout(user).await
}
