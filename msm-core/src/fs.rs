// msm-core/src/fs.rs
//! Filesystem primitives used by the install workflow.
//!
//! Every failure is reported as [`MsmError::FilesystemFailure`] with the
//! offending path in the message.

use std::fs;
use std::io;
use std::path::Path;

use fs_extra::dir::CopyOptions as DirCopyOptions;
use fs_extra::file::CopyOptions as FileCopyOptions;
use msm_common::error::{MsmError, Result};
use tracing::{debug, error};

fn failure(action: &str, path: &Path, err: impl std::fmt::Display) -> MsmError {
    error!("Failed to {} {}: {}", action, path.display(), err);
    MsmError::FilesystemFailure(format!("Failed to {action} {}: {err}", path.display()))
}

/// Creates a directory and all its parent components if they are missing.
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| failure("create directory", path, e))
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    debug!("Writing file: {}", path.display());
    fs::write(path, contents).map_err(|e| failure("write", path, e))
}

/// Reads a file, mapping "not found" to `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(failure("read", path, e)),
    }
}

pub fn create_file(path: &Path) -> Result<fs::File> {
    debug!("Creating file: {}", path.display());
    fs::File::create(path).map_err(|e| failure("create file", path, e))
}

/// Removes a directory and all its contents recursively. Missing is fine.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    debug!("Removing directory recursively: {}", path.display());
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(failure("remove directory", path, e)),
    }
}

/// Whether a failed rename means the two paths sit on different filesystems.
fn crosses_devices(err: &io::Error) -> bool {
    #[cfg(unix)]
    const CROSS_DEVICE: i32 = 18; // EXDEV
    #[cfg(windows)]
    const CROSS_DEVICE: i32 = 17; // ERROR_NOT_SAME_DEVICE
    #[cfg(not(any(unix, windows)))]
    const CROSS_DEVICE: i32 = -1;

    err.raw_os_error() == Some(CROSS_DEVICE)
}

/// Moves a whole directory to `to`, which must not exist yet.
///
/// Tries a rename first and falls back to copy-then-delete only when the two
/// paths sit on different filesystems.
pub fn move_dir(from: &Path, to: &Path) -> Result<()> {
    debug!("Moving directory {} -> {}", from.display(), to.display());
    if to.exists() {
        return Err(failure(
            "move directory onto existing path",
            to,
            format!("source {}", from.display()),
        ));
    }
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) if !crosses_devices(&rename_err) => {
            Err(failure("move directory", from, rename_err))
        }
        Err(rename_err) => {
            debug!(
                "Rename {} -> {} crosses devices ({}), copying instead",
                from.display(),
                to.display(),
                rename_err
            );
            let mut options = DirCopyOptions::new();
            options.copy_inside = true;
            fs_extra::dir::move_dir(from, to, &options)
                .map(|_| ())
                .map_err(|e| failure("move directory", from, e))
        }
    }
}

/// Moves a single file, replacing `to` if it exists.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    debug!("Moving file {} -> {}", from.display(), to.display());
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) if !crosses_devices(&rename_err) => {
            Err(failure("move file", from, rename_err))
        }
        Err(rename_err) => {
            debug!(
                "Rename {} -> {} crosses devices ({}), copying instead",
                from.display(),
                to.display(),
                rename_err
            );
            let mut options = FileCopyOptions::new();
            options.overwrite = true;
            fs_extra::file::move_file(from, to, &options)
                .map(|_| ())
                .map_err(|e| failure("move file", from, e))
        }
    }
}

/// Sets file permissions (Unix only). Mode is standard Unix octal mode.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    debug!("Setting permissions on {}: {:o}", path.display(), mode);
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| failure("set permissions on", path, e))
}

#[cfg(not(unix))]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    debug!(
        "Ignoring mode {:o} for {} on this platform",
        mode,
        path.display()
    );
    Ok(())
}
