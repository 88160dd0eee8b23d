// msm-core/src/build/runtime.rs
use std::path::PathBuf;

use msm_common::config::Config;
use msm_common::error::{MsmError, Result};
use msm_common::model::JavaRuntime;
use tracing::debug;

/// Picks the Java generation BuildTools needs for `version`.
///
/// Only the second dotted component matters, plus the patch level for the
/// 1.17 line: `1.17` builds on JDK 8, `1.17.1x` on JDK 16, anything newer
/// on JDK 17.
pub fn select_runtime(version: &str) -> Result<JavaRuntime> {
    let parts: Vec<&str> = version.split('.').collect();
    let core_str = parts.get(1).ok_or_else(|| {
        MsmError::InvalidVersion(
            version.to_string(),
            "expected at least two dot-separated components".to_string(),
        )
    })?;
    let core: u32 = core_str.parse().map_err(|e| {
        MsmError::InvalidVersion(
            version.to_string(),
            format!("component '{core_str}' is not a number: {e}"),
        )
    })?;

    let runtime = if core < 17 || (core == 17 && parts.len() == 2) {
        JavaRuntime::Legacy
    } else if core == 17 && parts.get(2).is_some_and(|patch| patch.starts_with('1')) {
        JavaRuntime::Intermediate
    } else {
        JavaRuntime::Modern
    };
    debug!("Version {} builds with {}", version, runtime);
    Ok(runtime)
}

/// Resolves the configured executable for `runtime`.
///
/// Bare command names are looked up on `PATH`; anything else must point at
/// an executable file.
pub fn java_executable(config: &Config, runtime: JavaRuntime) -> Result<PathBuf> {
    let configured = config.java.path_for(runtime);
    which::which(configured).map_err(|e| {
        MsmError::CommandExecError(format!(
            "Java runtime for {runtime} not found at '{}': {e}",
            configured.display()
        ))
    })
}
