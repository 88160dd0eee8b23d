// msm-net/src/artifact.rs
//! Server jar and BuildTools downloads.

use msm_common::error::{MsmError, Result};
use msm_common::model::{ServerKind, VersionMetadata};
use reqwest::Client;
use tracing::{debug, error};

use crate::http::{get_bytes, get_json};

#[derive(Debug, Clone)]
pub struct ArtifactFetcher {
    client: Client,
    buildtools_url: String,
}

impl ArtifactFetcher {
    pub fn new(client: Client, buildtools_url: impl Into<String>) -> Self {
        Self {
            client,
            buildtools_url: buildtools_url.into(),
        }
    }

    /// Returns the raw bytes for `kind`.
    ///
    /// For [`ServerKind::Vanilla`] this follows `metadata_url` to the server
    /// download. For [`ServerKind::Spigot`] the metadata URL is ignored and
    /// the BuildTools jar is returned instead.
    pub async fn fetch(&self, kind: ServerKind, metadata_url: Option<&str>) -> Result<Vec<u8>> {
        match kind {
            ServerKind::Vanilla => {
                let metadata_url = metadata_url.ok_or_else(|| {
                    MsmError::ArtifactUnavailable(
                        String::new(),
                        "no metadata URL supplied for a vanilla download".to_string(),
                    )
                })?;
                self.fetch_vanilla(metadata_url).await
            }
            ServerKind::Spigot => self.fetch_buildtools().await,
        }
    }

    async fn fetch_vanilla(&self, metadata_url: &str) -> Result<Vec<u8>> {
        debug!("Fetching version metadata from {}", metadata_url);
        let metadata: VersionMetadata = get_json(&self.client, metadata_url)
            .await
            .map_err(|e| unavailable(metadata_url, e))?;

        let server_url = metadata.server_url().ok_or_else(|| {
            error!("Metadata at {} has no downloads.server.url", metadata_url);
            MsmError::ArtifactUnavailable(
                metadata_url.to_string(),
                "metadata has no downloads.server.url".to_string(),
            )
        })?;

        debug!("Downloading server jar from {}", server_url);
        get_bytes(&self.client, server_url)
            .await
            .map_err(|e| unavailable(server_url, e))
    }

    async fn fetch_buildtools(&self) -> Result<Vec<u8>> {
        debug!("Downloading BuildTools from {}", self.buildtools_url);
        get_bytes(&self.client, &self.buildtools_url)
            .await
            .map_err(|e| unavailable(&self.buildtools_url, e))
    }
}

fn unavailable(url: &str, err: MsmError) -> MsmError {
    error!("Artifact download from {} failed: {}", url, err);
    MsmError::ArtifactUnavailable(url.to_string(), err.to_string())
}
