pub mod common;
pub mod exercise;
pub mod progress;

pub use common::ActionResult;
pub use exercise::{CreateExerciseRequest, CreateExerciseResult};
pub use progress::{LogProgressRequest, UpdateProgressRequest};
