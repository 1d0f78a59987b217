use storage::{
    TrackerService,
    dto::exercise::{CreateExerciseRequest, CreateExerciseResult},
    models::Exercise,
};

/// List all exercises for the current user
pub async fn list_exercises(tracker: &TrackerService, user: Option<&str>) -> Vec<Exercise> {
    tracker.list_exercises(user).await
}

/// Get one exercise by id
pub async fn get_exercise(
    tracker: &TrackerService,
    user: Option<&str>,
    id: &str,
) -> Option<Exercise> {
    tracker.get_exercise(user, id).await
}

/// Create a new exercise
pub async fn create_exercise(
    tracker: &TrackerService,
    user: Option<&str>,
    request: &CreateExerciseRequest,
) -> CreateExerciseResult {
    tracker.create_exercise(user, request).await
}
