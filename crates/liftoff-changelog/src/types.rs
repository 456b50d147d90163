//! Changelog types

use serde::{Deserialize, Serialize};

/// Commit category, derived from message markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Backwards-incompatible change
    Breaking,
    /// Bug fix
    Bug,
    /// New feature
    Feature,
    /// Performance improvement
    Performance,
    /// Everything else; never rendered
    Miscellaneous,
}

impl Category {
    /// Section order for rendering
    ///
    /// Note this differs from classification priority (Breaking, Bug,
    /// Feature, Performance); features are shown above fixes on purpose.
    pub const DISPLAY_ORDER: [Category; 4] = [
        Category::Breaking,
        Category::Feature,
        Category::Bug,
        Category::Performance,
    ];

    /// Section heading for this category; Miscellaneous has none
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::Breaking => Some("💥 BREAKING CHANGES!"),
            Self::Feature => Some("✨ New features"),
            Self::Bug => Some("🐛 Bug fixes"),
            Self::Performance => Some("☇ Performance increases"),
            Self::Miscellaneous => None,
        }
    }
}

/// A single rendered line of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Short commit identifier
    pub id: String,
    /// Commit message (first line)
    pub message: String,
}

/// A changelog section: a category with its commits in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// The section's category
    pub category: Category,
    /// Entries in the order the commits were supplied
    pub entries: Vec<SectionEntry>,
}

impl Section {
    /// Create an empty section
    pub fn new(category: Category) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Grouped release notes ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    /// Non-empty sections in display order
    pub sections: Vec<Section>,
    /// Whether the attribution footer is appended when rendering
    pub attribution: bool,
}

impl Changelog {
    /// Check if the changelog has any sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
