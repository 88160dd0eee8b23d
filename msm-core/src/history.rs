// msm-core/src/history.rs
use std::fs;
use std::path::{Component, Path, PathBuf};

use msm_common::config::{marker_file_name, Config};
use msm_common::error::{MsmError, Result};
use msm_common::naming::format_name_now;
use tracing::{debug, info, warn};

use crate::fs::{create_dir_all, move_dir, read_optional};

/// One archived installation under the previous-installations root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub path: PathBuf,
    /// Marker value found inside the archived directory, if any.
    pub version: Option<String>,
}

/// Moves the current installation into history and recreates an empty
/// current directory. Returns the new history path.
///
/// Fails before touching anything if the computed name is not a single
/// path component or the history path already exists.
pub fn archive_current(config: &Config, version: &str) -> Result<PathBuf> {
    let name = format_name_now(&config.archive_format, version);
    ensure_plain_name(&name)?;
    let target = config.history_entry_path(&name);
    let current = config.current_dir();

    if target.exists() {
        return Err(MsmError::FilesystemFailure(format!(
            "History entry {} already exists; refusing to overwrite it",
            target.display()
        )));
    }

    create_dir_all(&config.previous_dir())?;
    move_dir(&current, &target)?;
    create_dir_all(&current)?;

    info!("Archived {} to {}", version, target.display());
    Ok(target)
}

fn ensure_plain_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\']);
    if plain {
        Ok(())
    } else {
        Err(MsmError::FilesystemFailure(format!(
            "History entry name '{name}' is not a single directory name"
        )))
    }
}

/// All history entries, sorted by directory name.
pub fn list_history(config: &Config) -> Result<Vec<HistoryEntry>> {
    let previous = config.previous_dir();
    if !previous.is_dir() {
        debug!("No history directory at {}", previous.display());
        return Ok(Vec::new());
    }

    let read = fs::read_dir(&previous).map_err(|e| {
        MsmError::FilesystemFailure(format!("Failed to read {}: {e}", previous.display()))
    })?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", previous.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let version = read_optional(&path.join(marker_file_name()))?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        entries.push(HistoryEntry {
            name,
            path,
            version,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::fs::write_file;

    #[test]
    fn archive_moves_current_and_recreates_it() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::for_root(tmp.path());
        config.archive_format = "%V__archived".to_string();
        create_dir_all(&config.current_dir()).unwrap();
        write_file(&config.marker_path(), "1.19").unwrap();

        let archived = archive_current(&config, "1.19").unwrap();

        assert_eq!(archived, config.previous_dir().join("1.19__archived"));
        assert_eq!(
            fs::read_to_string(archived.join("version.txt")).unwrap(),
            "1.19"
        );
        assert!(config.current_dir().is_dir());
        assert!(!config.marker_path().exists());
    }

    #[test]
    fn archive_collision_leaves_current_in_place() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::for_root(tmp.path());
        config.archive_format = "fixed".to_string();
        create_dir_all(&config.current_dir()).unwrap();
        create_dir_all(&config.previous_dir().join("fixed")).unwrap();
        write_file(&config.marker_path(), "1.19").unwrap();

        let err = archive_current(&config, "1.19").unwrap_err();

        assert!(matches!(err, MsmError::FilesystemFailure(_)));
        assert!(config.marker_path().is_file());
    }

    #[test]
    fn archive_rejects_names_that_escape_the_history_root() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::for_root(tmp.path());
        create_dir_all(&config.current_dir()).unwrap();
        write_file(&config.marker_path(), "VANILLA1.20/").unwrap();

        for (format, marker) in [("%V__%Y", "VANILLA1.20/"), ("%V", ".."), ("%V__%Y", "a\\b")] {
            config.archive_format = format.to_string();
            let err = archive_current(&config, marker).unwrap_err();
            assert!(matches!(err, MsmError::FilesystemFailure(_)), "{marker}");
        }

        assert!(config.marker_path().is_file());
        assert!(list_history(&config).unwrap().is_empty());
    }

    #[test]
    fn list_history_reads_archived_markers() {
        let tmp = TempDir::new().unwrap();
        let config = Config::for_root(tmp.path());
        let a = config.previous_dir().join("1.18__1-1-2024__0-0-0");
        let b = config.previous_dir().join("1.19__2-1-2024__0-0-0");
        create_dir_all(&a).unwrap();
        create_dir_all(&b).unwrap();
        write_file(&a.join("version.txt"), "1.18").unwrap();

        let entries = list_history(&config).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].version.as_deref(), Some("1.18"));
        assert_eq!(entries[1].version, None);
    }

    #[test]
    fn missing_history_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(list_history(&Config::for_root(tmp.path())).unwrap().is_empty());
    }
}
