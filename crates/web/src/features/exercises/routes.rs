use axum::{
    Router,
    routing::{get, post},
};
use storage::TrackerService;

use super::handlers::{create_exercise, get_exercise, list_exercises};

pub fn routes() -> Router<TrackerService> {
    Router::new()
        .route("/", get(list_exercises))
        .route("/", post(create_exercise))
        .route("/:id", get(get_exercise))
}
