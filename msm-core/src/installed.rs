// msm-core/src/installed.rs
//! Reading the current installation's marker and state.

use std::fs;
use std::path::Path;

use msm_common::config::Config;
use msm_common::error::Result;
use tracing::debug;

use crate::fs::read_optional;

/// What `version.txt` says about the current installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentMarker {
    /// No current directory at all.
    Absent,
    /// Directory present, marker missing or blank.
    Unmarked,
    Marked(String),
}

impl CurrentMarker {
    /// The installed version, if there is one worth archiving.
    pub fn version(&self) -> Option<&str> {
        match self {
            CurrentMarker::Marked(v) => Some(v),
            _ => None,
        }
    }
}

/// Where the current installation sits in `Empty -> Staged -> Populated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationState {
    Empty,
    /// Marker written, but no jar or launch script; a failed or running install.
    Staged,
    Populated,
}

pub fn read_marker(config: &Config) -> Result<CurrentMarker> {
    let current = config.current_dir();
    if !current.is_dir() {
        debug!("No current installation at {}", current.display());
        return Ok(CurrentMarker::Absent);
    }
    let marker = read_optional(&config.marker_path())?;
    Ok(match marker.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => CurrentMarker::Marked(v.to_string()),
        _ => CurrentMarker::Unmarked,
    })
}

pub fn installation_state(config: &Config) -> Result<InstallationState> {
    if read_marker(config)?.version().is_none() {
        return Ok(InstallationState::Empty);
    }
    let current = config.current_dir();
    let has_script = current.join(config.script_platform.file_name()).is_file();
    if has_script && has_jar(&current) {
        Ok(InstallationState::Populated)
    } else {
        Ok(InstallationState::Staged)
    }
}

fn has_jar(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries.flatten().any(|entry| {
                let path = entry.path();
                path.is_file() && path.extension().is_some_and(|ext| ext == "jar")
            })
        })
        .unwrap_or(false)
}
