//! Hosting error types

use thiserror::Error;

/// Result type for hosting operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Hosting-related errors
#[derive(Debug, Error)]
pub enum HostError {
    /// No API token configured
    #[error("No hosting API token configured")]
    MissingToken,

    /// API error from the hosting platform
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Asset upload failed
    #[error("Upload failed for {name}: {reason}")]
    UploadFailed { name: String, reason: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error reading an artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
