use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Exercise;

/// Request payload for adding an exercise
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Category is required"))]
    pub category: String,
}

/// Outcome of `create_exercise`, carrying the created record on success
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateExerciseResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

impl CreateExerciseResult {
    pub fn ok(message: &str, exercise: Exercise) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            exercise: Some(exercise),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            exercise: None,
        }
    }
}
