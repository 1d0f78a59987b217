pub mod exercise;
pub mod progress;

pub use exercise::ExerciseRepository;
pub use progress::ProgressRepository;
