use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_UNIT: &str = "kgs";

/// A tracked movement with its denormalized weight aggregates.
///
/// `last_weight` is the peak of the most recently written progress entry
/// (last write wins, not latest by date); `personal_best` is the all-time
/// maximum peak and never decreases. Both are maintained at write time by
/// the progress operations, not recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Numeric string, unique per user, assigned as max(existing) + 1.
    pub id: String,
    pub name: String,
    /// Muscle-group label; free-form at this layer.
    pub category: String,
    pub last_weight: f64,
    pub personal_best: f64,
    pub unit: String,
}

impl Exercise {
    /// A freshly created exercise: zeroed aggregates, default unit.
    pub fn new(id: String, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            last_weight: 0.0,
            personal_best: 0.0,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}
