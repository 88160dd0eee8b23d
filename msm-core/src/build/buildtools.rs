// msm-core/src/build/buildtools.rs
use std::path::{Path, PathBuf};
use std::process::Stdio;

use msm_common::config::Config;
use msm_common::error::{MsmError, Result};
use msm_common::model::ServerKind;
use msm_net::ArtifactFetcher;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::cwd::WorkingDirGuard;
use super::runtime::{java_executable, select_runtime};
use crate::fs::{create_dir_all, create_file, write_file};

pub const BUILDTOOLS_JAR: &str = "buildtools.jar";
pub const STDOUT_LOG: &str = "build_stdout.txt";
pub const STDERR_LOG: &str = "build_stderr.txt";
const BUILD_HEAP_ARG: &str = "-Xmx512M";

/// Where a build run leaves its captured stdout and stderr.
pub fn log_paths(staging_root: &Path) -> (PathBuf, PathBuf) {
    (staging_root.join(STDOUT_LOG), staging_root.join(STDERR_LOG))
}

/// Downloads BuildTools into `<staging_root>/tmp` and compiles `version` there.
///
/// The produced jar stays in the staging directory and the logs stay in
/// `staging_root`; nothing is returned. The process working directory is
/// restored before this returns, whatever the outcome. The child's exit
/// status is only logged; the caller decides success by looking for output.
pub async fn run_buildtools(
    config: &Config,
    fetcher: &ArtifactFetcher,
    staging_root: &Path,
    version: &str,
) -> Result<()> {
    let guard = WorkingDirGuard::record()?;

    let staging = config.staging_dir(staging_root);
    create_dir_all(&staging)?;

    let buildtools = fetcher.fetch(ServerKind::Spigot, None).await?;
    write_file(&staging.join(BUILDTOOLS_JAR), &buildtools)?;
    debug!(
        "Staged {} ({} bytes) in {}",
        BUILDTOOLS_JAR,
        buildtools.len(),
        staging.display()
    );

    let runtime = select_runtime(version)?;
    let java = java_executable(config, runtime)?;

    let (stdout_path, stderr_path) = log_paths(staging_root);
    let stdout = create_file(&stdout_path)?;
    let stderr = create_file(&stderr_path)?;

    guard.enter(&staging)?;

    info!(
        "Running BuildTools for {} with {} ({}), timeout {:?}",
        version,
        java.display(),
        runtime,
        config.build_timeout
    );
    let mut cmd = Command::new(&java);
    cmd.arg(BUILD_HEAP_ARG)
        .arg("-jar")
        .arg(BUILDTOOLS_JAR)
        .arg("--rev")
        .arg(version)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr))
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|e| {
        MsmError::CommandExecError(format!("Failed to start {}: {e}", java.display()))
    })?;

    match tokio::time::timeout(config.build_timeout, child.wait()).await {
        Ok(Ok(status)) => {
            if status.success() {
                debug!("BuildTools finished successfully.");
            } else {
                warn!(
                    "BuildTools exited with {}; see {}",
                    status,
                    stderr_path.display()
                );
            }
            Ok(())
        }
        Ok(Err(e)) => Err(MsmError::CommandExecError(format!(
            "Failed to wait for BuildTools: {e}"
        ))),
        Err(_) => {
            warn!(
                "BuildTools exceeded {:?}, killing it",
                config.build_timeout
            );
            if let Err(e) = child.kill().await {
                warn!("Failed to kill BuildTools process: {}", e);
            }
            Err(MsmError::BuildTimeout(config.build_timeout))
        }
    }
}
