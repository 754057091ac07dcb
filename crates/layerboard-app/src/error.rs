use crate::config::ConfigError;
use layerboard_core::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Storage: {0}")]
    Storage(#[from] StorageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
