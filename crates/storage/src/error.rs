use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Store rejected request: {0}")]
    Store(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Not found")]
    NotFound,

    #[error("Not authenticated")]
    Unauthenticated,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, StorageError::Unauthenticated)
    }
}
