use crate::error::AppError;

/// Failures that abort an ingestion request.
///
/// Decoding never fails, so there is no variant for it.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Persistence(String),
}

impl From<IngestionError> for AppError {
    fn from(err: IngestionError) -> Self {
        match err {
            IngestionError::Transport(msg) => AppError::Transport(msg),
            IngestionError::Persistence(msg) => AppError::Persistence(msg),
        }
    }
}
