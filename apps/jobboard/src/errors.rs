use thiserror::Error;

use crate::api::ApiError;
use crate::store::StoreError;

/// Application-level error type.
/// Every CLI command returns `Result<(), AppError>`; `main` maps the
/// error to a stderr message and a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
