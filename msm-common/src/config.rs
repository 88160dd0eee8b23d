// msm-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use tracing::debug;

use super::error::{MsmError, Result};
use crate::model::{JavaRuntimes, ScriptPlatform};
use crate::naming::DEFAULT_ARCHIVE_FORMAT;

pub const DEFAULT_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest_v2.json";
pub const DEFAULT_BUILDTOOLS_URL: &str =
    "https://hub.spigotmc.org/jenkins/job/BuildTools/lastSuccessfulBuild/artifact/target/BuildTools.jar";
pub const DEFAULT_BUILD_TIMEOUT_SECS: u64 = 1200;

const MARKER_FILENAME: &str = "version.txt";
const EULA_FILENAME: &str = "eula.txt";
const STAGING_DIRNAME: &str = "tmp";

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub manifest_url: String,
    pub buildtools_url: String,
    pub archive_format: String,
    pub build_timeout: Duration,
    pub java: JavaRuntimes,
    pub script_platform: ScriptPlatform,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading msm configuration");

        let root = match env::var("MSM_ROOT").ok().filter(|s| !s.is_empty()) {
            Some(root) => PathBuf::from(root),
            None => {
                let fallback = default_root();
                debug!(
                    "MSM_ROOT not set or empty, falling back to default: {}",
                    fallback.display()
                );
                fallback
            }
        };
        debug!("Effective msm root set to: {}", root.display());

        let mut config = Self::for_root(root);

        if let Some(url) = non_empty_var("MSM_MANIFEST_URL") {
            config.manifest_url = url;
        }
        if let Some(url) = non_empty_var("MSM_BUILDTOOLS_URL") {
            config.buildtools_url = url;
        }
        if let Some(format) = non_empty_var("MSM_ARCHIVE_FORMAT") {
            config.archive_format = format;
        }
        if let Some(secs) = non_empty_var("MSM_BUILD_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|e| {
                MsmError::Config(format!("MSM_BUILD_TIMEOUT_SECS must be whole seconds: {e}"))
            })?;
            config.build_timeout = Duration::from_secs(secs);
        }
        if let Some(java) = non_empty_var("MSM_JAVA8") {
            config.java.legacy = PathBuf::from(java);
        }
        if let Some(java) = non_empty_var("MSM_JAVA16") {
            config.java.intermediate = PathBuf::from(java);
        }
        if let Some(java) = non_empty_var("MSM_JAVA17") {
            config.java.modern = PathBuf::from(java);
        }
        if let Some(platform) = non_empty_var("MSM_LAUNCH_SCRIPT") {
            config.script_platform = platform.parse()?;
        }

        debug!("Configuration loaded successfully.");
        Ok(config)
    }

    /// Default configuration with every path under `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            buildtools_url: DEFAULT_BUILDTOOLS_URL.to_string(),
            archive_format: DEFAULT_ARCHIVE_FORMAT.to_string(),
            build_timeout: Duration::from_secs(DEFAULT_BUILD_TIMEOUT_SECS),
            java: JavaRuntimes::default(),
            script_platform: ScriptPlatform::host(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn servers_dir(&self) -> PathBuf {
        self.root.join("client_servers")
    }

    /// The live installation.
    pub fn current_dir(&self) -> PathBuf {
        self.servers_dir().join("current")
    }

    /// Root holding one directory per archived installation.
    pub fn previous_dir(&self) -> PathBuf {
        self.servers_dir().join("previous")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("log")
    }

    pub fn build_logs_dir(&self) -> PathBuf {
        self.logs_dir().join("builds")
    }

    pub fn marker_path(&self) -> PathBuf {
        self.current_dir().join(MARKER_FILENAME)
    }

    pub fn eula_path(&self) -> PathBuf {
        self.current_dir().join(EULA_FILENAME)
    }

    /// BuildTools scratch directory beneath `staging_root`.
    pub fn staging_dir(&self, staging_root: &Path) -> PathBuf {
        staging_root.join(STAGING_DIRNAME)
    }

    pub fn history_entry_path(&self, name: &str) -> PathBuf {
        self.previous_dir().join(name)
    }
}

pub fn marker_file_name() -> &'static str {
    MARKER_FILENAME
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

fn default_root() -> PathBuf {
    ProjectDirs::from("", "", "msm")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("msm"))
}
