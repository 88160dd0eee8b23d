use std::env;
use std::path::{Path, PathBuf};

use msm_common::error::{MsmError, Result};
use tracing::{debug, error};

/// RAII guard that restores the process working directory when dropped.
///
/// Restoration runs on success, on `?` early returns, and while unwinding.
#[derive(Debug)]
pub struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    /// Records the current directory without changing it.
    pub fn record() -> Result<Self> {
        let original = env::current_dir().map_err(|e| {
            MsmError::FilesystemFailure(format!("Failed to read current directory: {e}"))
        })?;
        Ok(Self { original })
    }

    /// Switches the process into `dir`. The recorded directory is restored on drop.
    pub fn enter(&self, dir: &Path) -> Result<()> {
        env::set_current_dir(dir).map_err(|e| {
            MsmError::FilesystemFailure(format!(
                "Failed to change directory to {}: {e}",
                dir.display()
            ))
        })?;
        debug!("Changed working directory to: {}", dir.display());
        Ok(())
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        match env::set_current_dir(&self.original) {
            Ok(()) => debug!("Restored working directory to: {}", self.original.display()),
            Err(e) => error!(
                "Failed to restore original working directory to {}: {}",
                self.original.display(),
                e
            ),
        }
    }
}
