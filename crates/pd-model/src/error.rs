use pd_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("report write error: {0}")]
    Report(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
