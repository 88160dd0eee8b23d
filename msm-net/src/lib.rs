// msm-net/src/lib.rs
pub mod artifact;
pub mod http;
pub mod manifest;

pub use artifact::ArtifactFetcher;
pub use http::build_http_client;
pub use manifest::{ManifestClient, ResolvedVersion, VersionIndex};
pub use msm_common::error::{MsmError, Result};
