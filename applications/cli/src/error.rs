/// Application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Client(#[from] playlist_client::ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] playlist_store::StorageError),

    #[error("Routing error: {0}")]
    Router(#[from] playlist_router::RouterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
