use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a mutating operation, surfaced to the user verbatim by the
/// presentation layer. The message is always a short fixed string;
/// diagnostic detail stays in the logs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
