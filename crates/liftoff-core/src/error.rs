//! Error types for Liftoff

use std::path::PathBuf;
use thiserror::Error;

use crate::types::ProjectKind;

/// Result type alias using LiftoffError
pub type Result<T> = std::result::Result<T, LiftoffError>;

/// Main error type for Liftoff operations
#[derive(Debug, Error)]
pub enum LiftoffError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Adapter-related errors
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    /// Repository identifier was not provided
    #[error("No repository specified (expected owner/name)")]
    MissingRepository,

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// No commits found
    #[error("No commits found in repository")]
    NoCommits,

    /// Failed to create tag
    #[error("Failed to create tag {name}: {reason}")]
    TagCreationFailed { name: String, reason: String },

    /// Underlying git2 error
    #[error("Git operation failed: {0}")]
    Git2(#[from] git2::Error),
}

/// Adapter-related errors
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Project kind has no adapter implementation
    #[error("No adapter implemented for {0} projects")]
    Unsupported(ProjectKind),

    /// Manifest file not found
    #[error("Manifest not found at {0}")]
    ManifestNotFound(PathBuf),

    /// Failed to parse manifest
    #[error("Failed to parse manifest: {0}")]
    ManifestParseError(String),

    /// Required manifest field missing
    #[error("Missing manifest field: {0}")]
    MissingField(&'static str),

    /// Required tool is not installed
    #[error("Required tool not found on PATH: {0}")]
    ToolNotFound(&'static str),

    /// Build subprocess failed
    #[error("Build failed: {0}")]
    BuildFailed(String),

    /// Publish subprocess failed
    #[error("Publish failed: {0}")]
    PublishFailed(String),

    /// Build produced no artifacts
    #[error("Build produced no artifacts in {0}")]
    NoArtifacts(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_adapter_message() {
        let err = AdapterError::Unsupported(ProjectKind::Python);
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn test_error_conversion() {
        let err: LiftoffError = ConfigError::MissingEnv("GITHUB_TOKEN").into();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }
}
