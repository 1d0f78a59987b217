pub mod exercise;
pub mod progress;

pub use exercise::Exercise;
pub use progress::{ProgressEntry, WorkoutSet};
