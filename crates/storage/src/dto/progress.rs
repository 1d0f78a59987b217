use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::WorkoutSet;

/// Request payload for logging a new workout session.
///
/// Up to four sets are honored; extra sets are ignored. The form layer
/// requires at least one set, but an empty list is not rejected here:
/// it simply yields a peak of 0.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogProgressRequest {
    pub date: NaiveDate,
    pub sets: Vec<WorkoutSet>,
}

/// Request payload for editing an existing session's sets
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProgressRequest {
    pub sets: Vec<WorkoutSet>,
}
