use std::path::PathBuf;
use thiserror::Error;
use warp::http::StatusCode;

/// Why a `/demo` request could not produce rows.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Nothing exists at the configured path.
    #[error("CSV not found at {}", .0.display())]
    NotFound(PathBuf),

    /// Anything else: open, read, parse or serialize failures.
    #[error("{0:#}")]
    Processing(#[from] anyhow::Error),
}

impl SampleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SampleError::NotFound(_) => StatusCode::NOT_FOUND,
            SampleError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
