use axum::{
    Router,
    routing::{get, post, put},
};
use storage::TrackerService;

use super::handlers::{list_progress, log_progress, most_recent_workout, update_progress};

/// Routes nested under /api/exercises.
pub fn exercise_routes() -> Router<TrackerService> {
    Router::new()
        .route("/:id/progress", get(list_progress))
        .route("/:id/progress", post(log_progress))
        .route("/:id/progress/:date", put(update_progress))
}

/// Routes nested under /api/workouts.
pub fn workout_routes() -> Router<TrackerService> {
    Router::new().route("/recent", get(most_recent_workout))
}
