use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Reserved for fallible backends; the in-memory repository never returns it.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
