//! Adapter lookup by project kind

use liftoff_core::error::AdapterError;
use liftoff_core::types::ProjectKind;

use crate::poetry::PoetryAdapter;
use crate::traits::ProjectAdapter;
use crate::Result;

/// Get the adapter for a project kind
///
/// Kinds without an implementation return [`AdapterError::Unsupported`]
/// rather than a panic, so new kinds can be added without changing the
/// behavior of existing ones.
pub fn adapter_for(kind: ProjectKind) -> Result<Box<dyn ProjectAdapter>> {
    match kind {
        ProjectKind::Python => Ok(Box::new(PoetryAdapter::new())),
        other => Err(AdapterError::Unsupported(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_has_adapter() {
        let adapter = adapter_for(ProjectKind::Python).unwrap();
        assert_eq!(adapter.name(), "poetry");
    }

    #[test]
    fn test_other_kinds_unsupported() {
        assert!(matches!(
            adapter_for(ProjectKind::Rust),
            Err(AdapterError::Unsupported(ProjectKind::Rust))
        ));
        assert!(matches!(
            adapter_for(ProjectKind::Node),
            Err(AdapterError::Unsupported(ProjectKind::Node))
        ));
    }
}
