//! Hosting types

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Hosting platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostingConfig {
    /// API base URL (default: "https://api.github.com")
    pub api_url: String,

    /// Repository identifier in `owner/name` form
    pub repository: String,

    /// API token
    pub token: String,
}

impl HostingConfig {
    /// Create a configuration against the default API endpoint
    pub fn new(repository: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            repository: repository.into(),
            token: token.into(),
        }
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Endpoint for creating releases in this repository
    pub fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_url, self.repository)
    }
}

/// Request payload for creating a release
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseRequest {
    /// Tag to create for the release
    pub tag_name: String,
    /// Commit the tag points at
    pub target_commitish: String,
    /// Release title
    pub name: String,
    /// Release notes body
    pub body: String,
}

/// A created release
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release identifier
    pub id: u64,
    /// Asset upload URL, as returned by the API (URI template)
    pub upload_url: String,
    /// Web URL of the release page
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Release {
    /// Asset upload endpoint with the `{?name,label}` template stripped
    pub fn asset_upload_url(&self) -> &str {
        match self.upload_url.find('{') {
            Some(pos) => &self.upload_url[..pos],
            None => &self.upload_url,
        }
    }
}
