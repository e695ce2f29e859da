//! Top-level application error.

use crate::domain::entities::ValidationError;
use crate::domain::repositories::{FetchError, StoreError};

/// Errors surfaced to the user.
///
/// Validation and fetch failures are kept apart so the CLI can tell an input
/// problem from a connectivity problem. Mapping rejections never show up
/// here: ingestion counts them instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Returns true for problems caused by user input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidInput(_))
    }

    /// Short category label used when reporting the error.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => "Input error",
            Self::Fetch(_) => "API connection error",
            Self::Store(_) => "Storage error",
        }
    }
}
