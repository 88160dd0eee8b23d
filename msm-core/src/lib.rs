// msm-core/src/lib.rs
pub mod build;
pub mod fs;
pub mod history;
pub mod install;
pub mod installed;

// Re-export key types for easier use by the CLI crate
pub use history::{list_history, HistoryEntry};
pub use install::{InstallReport, InstallationManager};
pub use installed::{installation_state, read_marker, CurrentMarker, InstallationState};
