//! Liftoff Core - shared types for release automation
//!
//! This crate provides the error hierarchy, release configuration, and
//! common types used by the other Liftoff crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::ReleaseConfig;
pub use error::{LiftoffError, Result};
pub use types::ProjectKind;
