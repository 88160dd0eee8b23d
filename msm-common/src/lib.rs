// msm-common/src/lib.rs
pub mod config;
pub mod error;
pub mod model;
pub mod naming;

// Re-export key types
pub use config::Config;
pub use error::{MsmError, Result};
pub use model::{InstallOptions, ServerKind, VersionRequest};
