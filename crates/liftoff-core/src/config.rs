//! Release configuration
//!
//! All credentials and the target repository are resolved once at startup
//! into an explicit [`ReleaseConfig`]; nothing downstream reads the process
//! environment.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable holding the hosting API token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Environment variable holding the package index username
pub const REGISTRY_USERNAME_VAR: &str = "PYPI_USERNAME";
/// Environment variable holding the package index password
pub const REGISTRY_PASSWORD_VAR: &str = "PYPI_PASSWORD";

/// Options for a release run, resolved once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Hosting API token
    pub token: String,
    /// Package index username, if configured
    pub registry_username: Option<String>,
    /// Package index password, if configured
    pub registry_password: Option<String>,
    /// Repository identifier in `owner/name` form
    pub repository: String,
}

impl ReleaseConfig {
    /// Resolve configuration from the environment for the given repository
    ///
    /// The hosting token is required; index credentials are optional here and
    /// checked again at publish time.
    pub fn from_env(repository: impl Into<String>) -> Result<Self> {
        let repository = repository.into();
        if repository.is_empty() {
            return Err(ConfigError::MissingRepository.into());
        }

        let token = env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingEnv(TOKEN_VAR))?;

        let registry_username = env::var(REGISTRY_USERNAME_VAR).ok();
        let registry_password = env::var(REGISTRY_PASSWORD_VAR).ok();
        debug!(
            repository = %repository,
            has_registry_credentials =
                registry_username.is_some() && registry_password.is_some(),
            "resolved release configuration"
        );

        Ok(Self {
            token,
            registry_username,
            registry_password,
            repository,
        })
    }

    /// Get index credentials, erroring when either half is missing
    pub fn registry_credentials(&self) -> Result<(&str, &str)> {
        match (&self.registry_username, &self.registry_password) {
            (Some(user), Some(pass)) => Ok((user.as_str(), pass.as_str())),
            (None, _) => Err(ConfigError::MissingEnv(REGISTRY_USERNAME_VAR).into()),
            (_, None) => Err(ConfigError::MissingEnv(REGISTRY_PASSWORD_VAR).into()),
        }
    }
}
