use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for capdemo
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Unknown text style '{0}'. Expected one of: bold, italic, code")]
    UnknownStyle(String),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
