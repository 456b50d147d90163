//! Release API client

use std::path::Path;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::error::{HostError, Result};
use crate::types::{HostingConfig, Release, ReleaseRequest};

/// Client for creating releases and uploading assets
pub struct ReleaseClient {
    config: HostingConfig,
    client: Client,
}

impl ReleaseClient {
    /// Create a new client from a configuration
    pub fn new(config: HostingConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(HostError::MissingToken);
        }

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Create a tagged release
    #[instrument(skip(self, request), fields(tag = %request.tag_name))]
    pub async fn create_release(&self, request: &ReleaseRequest) -> Result<Release> {
        let url = self.config.releases_url();
        info!(tag = %request.tag_name, repository = %self.config.repository, "creating release");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "liftoff")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HostError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let release: Release = response.json().await?;
        debug!(id = release.id, "release created");
        Ok(release)
    }

    /// Upload an artifact as a release asset
    ///
    /// Known artifact kinds carry a human-readable label; others are
    /// uploaded with their filename only.
    #[instrument(skip(self, release), fields(path = %path.display(), label))]
    pub async fn upload_asset(
        &self,
        release: &Release,
        path: &Path,
        label: Option<&str>,
    ) -> Result<()> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| HostError::UploadFailed {
                name: path.display().to_string(),
                reason: "artifact has no usable filename".to_string(),
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;

        let mut query: Vec<(&str, &str)> = vec![("name", &name)];
        if let Some(label) = label {
            query.push(("label", label));
        }

        info!(name = %name, size = bytes.len(), "uploading release asset");
        let response = self
            .client
            .post(release.asset_upload_url())
            .query(&query)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .header("Content-Type", "application/octet-stream")
            .header("User-Agent", "liftoff")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HostError::UploadFailed {
                name,
                reason: format!("{} - {}", status.as_u16(), message),
            });
        }

        debug!(name = %name, "asset uploaded");
        Ok(())
    }
}
