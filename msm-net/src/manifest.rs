// msm-net/src/manifest.rs
//! Version manifest lookups.

use std::collections::HashMap;

use msm_common::error::{MsmError, Result};
use msm_common::model::{ManifestEntry, VersionManifest, VersionRequest, LATEST};
use msm_common::Config;
use reqwest::Client;
use tracing::{debug, error};

use crate::http::{build_http_client, get_bytes};

/// A concrete version and where its metadata lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub id: String,
    pub metadata_url: String,
}

/// id -> metadata URL mapping built from one manifest snapshot, with
/// `LATEST` bound to the advertised release when that release is listed.
#[derive(Debug, Clone)]
pub struct VersionIndex {
    urls: HashMap<String, String>,
    latest_release: String,
    entries: Vec<ManifestEntry>,
}

impl VersionIndex {
    pub fn from_manifest(manifest: VersionManifest) -> Self {
        let mut urls: HashMap<String, String> = manifest
            .versions
            .iter()
            .map(|v| (v.id.clone(), v.url.clone()))
            .collect();

        match urls.get(&manifest.latest.release).cloned() {
            Some(url) => {
                urls.insert(LATEST.to_string(), url);
            }
            None => debug!(
                "Manifest advertises latest release '{}' but does not list it",
                manifest.latest.release
            ),
        }

        Self {
            urls,
            latest_release: manifest.latest.release,
            entries: manifest.versions,
        }
    }

    pub fn resolve(&self, request: &VersionRequest) -> Result<ResolvedVersion> {
        let key = request.as_key();
        let metadata_url = self
            .urls
            .get(key)
            .cloned()
            .ok_or_else(|| MsmError::UnknownVersion(key.to_string()))?;
        let id = match request {
            VersionRequest::Latest => self.latest_release.clone(),
            VersionRequest::Exact(id) => id.clone(),
        };
        Ok(ResolvedVersion { id, metadata_url })
    }

    pub fn latest_release(&self) -> &str {
        &self.latest_release
    }

    /// Manifest entries in manifest order (newest first upstream).
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ManifestClient {
    client: Client,
    manifest_url: String,
}

impl ManifestClient {
    pub fn new(client: Client, manifest_url: impl Into<String>) -> Self {
        Self {
            client,
            manifest_url: manifest_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(build_http_client()?, config.manifest_url.clone()))
    }

    /// Fetches and indexes the manifest. Never cached.
    pub async fn fetch_index(&self) -> Result<VersionIndex> {
        debug!("Fetching version manifest from {}", self.manifest_url);
        let body = get_bytes(&self.client, &self.manifest_url)
            .await
            .map_err(|e| {
                error!("Version manifest fetch failed: {}", e);
                MsmError::ManifestUnavailable(format!("{}: {e}", self.manifest_url))
            })?;
        let manifest: VersionManifest = serde_json::from_slice(&body).map_err(|e| {
            error!("Version manifest could not be parsed: {}", e);
            MsmError::ManifestUnavailable(format!(
                "Failed to parse manifest from {}: {e}",
                self.manifest_url
            ))
        })?;
        let index = VersionIndex::from_manifest(manifest);
        debug!(
            "Manifest lists {} versions, latest release {}",
            index.len(),
            index.latest_release()
        );
        Ok(index)
    }

    pub async fn resolve(&self, request: &VersionRequest) -> Result<ResolvedVersion> {
        let resolved = self.fetch_index().await?.resolve(request)?;
        debug!(
            "Resolved version '{}' to '{}' ({})",
            request, resolved.id, resolved.metadata_url
        );
        Ok(resolved)
    }
}
