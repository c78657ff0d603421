/// Failure to obtain a usable dataset. Terminal for the session's store.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Dataset contains no usable entries")]
    NoEntries,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Persisted study-list blob could not be decoded
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Corrupt study list state: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Persistence backend unavailable: {0}")]
    Unavailable(String),
}
