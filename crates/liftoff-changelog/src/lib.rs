//! Liftoff Changelog - commit classification and release notes
//!
//! Commits carry category markers in their messages, either as a tag
//! (`:bug:`) or as a single glyph (🐛). This crate classifies messages by
//! those markers, detects version-bump commits, and renders grouped
//! release notes.

mod builder;
mod classifier;
pub mod types;

pub use builder::ChangelogBuilder;
pub use classifier::{classify, is_version_bump};
pub use types::{Category, Changelog, Section, SectionEntry};
