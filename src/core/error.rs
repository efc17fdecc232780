//! Error types for sward

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Patch configuration violates a caller contract (radius, count, fade range).
    #[error("Invalid patch config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
