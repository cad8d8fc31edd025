//! Application error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the application and its command line front end.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendered image could not be written
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A pointer sample given on the command line is not `x,y`
    #[error("Invalid drag sample '{sample}': expected two numbers as x,y")]
    InvalidDragSample {
        /// The text that failed to parse
        sample: String,
    },
}

impl AppError {
    /// Create an invalid drag sample error.
    pub fn invalid_drag_sample(sample: impl Into<String>) -> Self {
        Self::InvalidDragSample {
            sample: sample.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
