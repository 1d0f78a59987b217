use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::TrackerService;

use super::handlers::{get_session, login, logout};

pub fn routes() -> Router<TrackerService> {
    Router::new()
        .route("/", post(login))
        .route("/", get(get_session))
        .route("/", delete(logout))
}
