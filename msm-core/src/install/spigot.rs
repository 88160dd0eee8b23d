// msm-core/src/install/spigot.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use glob::Pattern;
use msm_common::config::Config;
use msm_common::error::{MsmError, Result};
use msm_common::model::InstallOptions;
use tracing::{debug, error, info};

use super::{InstallationManager, Populated};
use crate::build::{log_paths, run_buildtools};
use crate::fs::{create_dir_all, move_file, remove_dir_all};

/// File name BuildTools gives the server jar it produces.
pub const SPIGOT_OUTPUT_PATTERN: &str = "spigot-*.jar";

impl InstallationManager {
    /// Compiles Spigot with BuildTools inside the current directory.
    ///
    /// The staged `SPIGOT<version>` marker is left as is.
    pub(super) async fn create_spigot(
        &self,
        version: &str,
        options: &InstallOptions,
    ) -> Result<Populated> {
        let config = &self.config;
        let current = config.current_dir();

        run_buildtools(config, &self.fetcher, &current, version).await?;

        let staging = config.staging_dir(&current);
        let output = locate_build_output(&staging)?;
        info!("BuildTools produced {}", output.display());

        let jar_name = options.jar_name();
        let jar = current.join(&jar_name);
        move_file(&output, &jar)?;

        archive_build_logs(config, &current)?;
        remove_dir_all(&staging)?;

        let launch_script = self.finish_installation(options, &jar_name)?;
        Ok(Populated { jar, launch_script })
    }
}

/// The single file in `staging` matching [`SPIGOT_OUTPUT_PATTERN`].
pub fn locate_build_output(staging: &Path) -> Result<PathBuf> {
    let pattern = Pattern::new(SPIGOT_OUTPUT_PATTERN)
        .map_err(|e| MsmError::Generic(format!("Invalid build output pattern: {e}")))?;
    let entries = fs::read_dir(staging).map_err(|e| {
        MsmError::FilesystemFailure(format!("Failed to read {}: {e}", staging.display()))
    })?;

    let mut matches: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| pattern.matches(n))
        })
        .collect();
    matches.sort();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => {
            error!(
                "No file matching {} in {}",
                SPIGOT_OUTPUT_PATTERN,
                staging.display()
            );
            Err(MsmError::BuildArtifactNotFound(
                SPIGOT_OUTPUT_PATTERN.to_string(),
                staging.display().to_string(),
            ))
        }
        _ => Err(MsmError::AmbiguousBuildArtifact(
            SPIGOT_OUTPUT_PATTERN.to_string(),
            matches
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        )),
    }
}

/// Moves the captured build logs into `<logs>/builds`, stamped with the
/// current time in nanoseconds.
fn archive_build_logs(config: &Config, staging_root: &Path) -> Result<()> {
    let builds = config.build_logs_dir();
    create_dir_all(&builds)?;

    let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let (stdout, stderr) = log_paths(staging_root);
    for log in [stdout, stderr] {
        let Some(name) = log.file_name() else {
            continue;
        };
        let target = builds.join(format!("{stamp}_{}", name.to_string_lossy()));
        move_file(&log, &target)?;
        debug!("Archived build log to {}", target.display());
    }
    Ok(())
}
