pub mod exercises;
pub mod progress;
pub mod session;
