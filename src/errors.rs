//! Error types for the citation network builder.
//!
//! Only startup and output-stage conditions surface as errors; per-lookup
//! failures against the remote APIs are swallowed at the client boundary
//! and reported as empty results instead.

use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Publications file not found: {path}")]
    PublicationsNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
