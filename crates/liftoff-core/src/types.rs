//! Common types

use serde::{Deserialize, Serialize};

/// The kind of project being released
///
/// Only Python projects are buildable today; the enum is closed so that
/// adding a kind later does not change behavior for existing ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Python project (pyproject.toml)
    #[default]
    Python,
    /// Rust project (Cargo.toml)
    Rust,
    /// Node project (package.json)
    Node,
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Node => "node",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ProjectKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "rust" => Ok(Self::Rust),
            "node" => Ok(Self::Node),
            other => Err(format!("unknown project kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_kind_roundtrip() {
        assert_eq!("python".parse::<ProjectKind>().unwrap(), ProjectKind::Python);
        assert_eq!(ProjectKind::Python.to_string(), "python");
        assert!("cobol".parse::<ProjectKind>().is_err());
    }
}
