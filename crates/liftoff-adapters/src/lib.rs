//! Liftoff Adapters - building and index publishing per project kind
//!
//! An adapter knows how to read a project's manifest, build its
//! distributable artifacts, and push them to the project's package index.
//! Only Python (Poetry) projects are implemented; other kinds resolve to
//! an explicit unsupported error.

mod artifacts;
mod poetry;
mod registry;
mod traits;

pub use artifacts::{ArtifactKind, ArtifactSet};
pub use poetry::PoetryAdapter;
pub use registry::adapter_for;
pub use traits::ProjectAdapter;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, liftoff_core::error::AdapterError>;
