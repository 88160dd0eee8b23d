// msm-common/src/model/version.rs
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MsmError;

/// Sentinel accepted wherever a version is requested.
pub const LATEST: &str = "LATEST";

/// A version as requested by the operator, before manifest resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionRequest {
    /// Whatever the manifest advertises as the current release.
    #[default]
    Latest,
    Exact(String),
}

impl VersionRequest {
    pub fn is_latest(&self) -> bool {
        matches!(self, VersionRequest::Latest)
    }

    /// Key used to look the request up in a resolved version mapping.
    pub fn as_key(&self) -> &str {
        match self {
            VersionRequest::Latest => LATEST,
            VersionRequest::Exact(id) => id,
        }
    }
}

/// Checks that `id` can be embedded in a marker or a history directory name.
pub fn validate_version_id(id: &str) -> Result<(), MsmError> {
    let reason = if id.is_empty() {
        Some("version must not be empty")
    } else if id.contains(['/', '\\']) {
        Some("version must not contain path separators")
    } else if id == "." || id == ".." {
        Some("version must not be a relative path component")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(MsmError::InvalidVersion(id.to_string(), reason.to_string())),
        None => Ok(()),
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for VersionRequest {
    type Err = MsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(LATEST) {
            return Ok(VersionRequest::Latest);
        }
        validate_version_id(trimmed)?;
        Ok(VersionRequest::Exact(trimmed.to_string()))
    }
}

/// `latest` block of the launcher manifest.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LatestVersions {
    pub release: String,
}

/// One entry of the manifest's `versions` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub release_type: Option<String>,
}

impl ManifestEntry {
    pub fn is_release(&self) -> bool {
        self.release_type.as_deref() == Some("release")
    }
}

/// The launcher manifest document (`version_manifest_v2.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct VersionManifest {
    pub latest: LatestVersions,
    pub versions: Vec<ManifestEntry>,
}

/// Per-version metadata document. Only the fields msm reads are modelled.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct VersionMetadata {
    #[serde(default)]
    pub downloads: Option<MetadataDownloads>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MetadataDownloads {
    #[serde(default)]
    pub server: Option<DownloadLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadLink {
    pub url: String,
}

impl VersionMetadata {
    /// `downloads.server.url`, if the metadata carries a server download.
    pub fn server_url(&self) -> Option<&str> {
        self.downloads
            .as_ref()
            .and_then(|d| d.server.as_ref())
            .map(|s| s.url.as_str())
    }
}
