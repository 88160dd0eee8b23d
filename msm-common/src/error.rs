use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MsmError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Version manifest unavailable: {0}")]
    ManifestUnavailable(String),

    #[error("Unknown version: '{0}'")]
    UnknownVersion(String),

    #[error("Artifact unavailable from '{0}': {1}")]
    ArtifactUnavailable(String, String),

    #[error("Unsupported server kind: \"{0}\"")]
    UnsupportedKind(String),

    #[error("Invalid version string '{0}': {1}")]
    InvalidVersion(String, String),

    #[error("Build did not finish within {0:?}")]
    BuildTimeout(Duration),

    #[error("No build output matching '{0}' in {1}")]
    BuildArtifactNotFound(String, String),

    #[error("Expected one build output matching '{0}', found {1:?}")]
    AmbiguousBuildArtifact(String, Vec<String>),

    #[error("Filesystem failure: {0}")]
    FilesystemFailure(String),

    #[error("Failed to execute command: {0}")]
    CommandExecError(String),

    #[error("HttpError: {0}")]
    HttpError(String),

    #[error("Generic Error: {0}")]
    Generic(String),
}

impl From<std::io::Error> for MsmError {
    fn from(err: std::io::Error) -> Self {
        MsmError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for MsmError {
    fn from(err: reqwest::Error) -> Self {
        MsmError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for MsmError {
    fn from(err: serde_json::Error) -> Self {
        MsmError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, MsmError>;
