//! Liftoff Git - repository operations for release automation
//!
//! This crate provides the commit and tag queries the release pipeline
//! needs: the head commit (for version-bump detection), commit ranges
//! (for changelog generation), and recently created tags (for range
//! selection).

mod commits;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
