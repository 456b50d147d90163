//! Project adapter trait

use std::path::Path;

use crate::artifacts::ArtifactSet;
use crate::Result;

/// Trait for project adapters
pub trait ProjectAdapter: Send + Sync {
    /// Get the adapter name (e.g., "poetry")
    fn name(&self) -> &'static str;

    /// Check if this adapter applies to the given path
    fn detect(&self, path: &Path) -> bool;

    /// Get the manifest filename(s) this adapter handles
    fn manifest_names(&self) -> &[&str];

    /// Get the project name from the manifest
    fn project_name(&self, path: &Path) -> Result<String>;

    /// Get the project version from the manifest
    fn project_version(&self, path: &Path) -> Result<String>;

    /// Build distributable artifacts
    fn build(&self, path: &Path) -> Result<ArtifactSet>;

    /// Publish built artifacts to the package index
    fn publish(&self, path: &Path, username: &str, password: &str) -> Result<()>;
}
