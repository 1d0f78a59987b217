pub mod dto;
pub mod error;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;
pub mod tables;

pub use error::{Result, StorageError};
pub use services::tracker::TrackerService;
pub use store::{memory::MemoryStore, sheets::SheetsStore, Row, TabularStore};
