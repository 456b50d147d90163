//! Liftoff Hosting - tagged releases on the code-hosting platform
//!
//! Creates a release (tag, title, notes body) against a target commit and
//! uploads built artifacts as labeled release assets.

mod client;
pub mod error;
pub mod types;

pub use client::ReleaseClient;
pub use error::{HostError, Result};
pub use types::{HostingConfig, Release, ReleaseRequest};
