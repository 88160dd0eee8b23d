// msm-core/src/install/mod.rs
//! The install workflow: archive whatever is current, stage a marker, then
//! populate the fresh directory for the requested server kind.
//!
//! Installs are expected to run one at a time against a given root. Nothing
//! here locks the directories, so two concurrent installs into the same
//! root will trample each other.

use std::path::{Path, PathBuf};

use msm_common::config::Config;
use msm_common::error::Result;
use msm_common::model::{validate_version_id, InstallOptions, ServerKind, VersionRequest};
use msm_net::{build_http_client, ArtifactFetcher, ManifestClient, ResolvedVersion};
use tracing::{debug, info, instrument};

use crate::build::{java_executable, select_runtime};
use crate::fs::{create_dir_all, set_mode, write_file};
use crate::history::archive_current;
use crate::installed::read_marker;

mod spigot;
mod vanilla;

pub use spigot::{locate_build_output, SPIGOT_OUTPUT_PATTERN};

const EULA_ACCEPTED: &str = "eula=True";

/// What an install produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Concrete version installed (never the `LATEST` sentinel).
    pub version: String,
    pub kind: ServerKind,
    /// Value left in `version.txt`.
    pub marker: String,
    pub current_dir: PathBuf,
    /// History entry the previous installation was moved to, if there was one.
    pub archived: Option<PathBuf>,
    pub jar: PathBuf,
    pub launch_script: PathBuf,
}

/// Artifacts a kind-specific creation routine leaves behind.
struct Populated {
    jar: PathBuf,
    launch_script: PathBuf,
}

pub struct InstallationManager {
    config: Config,
    manifest: ManifestClient,
    fetcher: ArtifactFetcher,
}

impl InstallationManager {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client()?;
        let manifest = ManifestClient::new(client.clone(), config.manifest_url.clone());
        let fetcher = ArtifactFetcher::new(client, config.buildtools_url.clone());
        Ok(Self::with_clients(config, manifest, fetcher))
    }

    pub fn with_clients(config: Config, manifest: ManifestClient, fetcher: ArtifactFetcher) -> Self {
        Self {
            config,
            manifest,
            fetcher,
        }
    }

    #[instrument(skip(self, options))]
    pub async fn install_new_version(
        &self,
        request: &VersionRequest,
        kind: ServerKind,
        options: &InstallOptions,
    ) -> Result<InstallReport> {
        let config = &self.config;

        // LATEST never reaches the disk.
        let (version, resolved) = match request {
            VersionRequest::Latest => {
                let resolved = self.manifest.resolve(request).await?;
                info!("LATEST resolved to {}", resolved.id);
                (resolved.id.clone(), Some(resolved))
            }
            VersionRequest::Exact(id) => (id.clone(), None),
        };
        validate_version_id(&version)?;

        // A Spigot build that cannot run must not cost the current install.
        if kind == ServerKind::Spigot {
            let runtime = select_runtime(&version)?;
            let java = java_executable(config, runtime)?;
            debug!("Spigot {} will build with {}", version, java.display());
        }

        let marker = read_marker(config)?;
        debug!("Current installation marker: {:?}", marker);
        create_dir_all(&config.previous_dir())?;
        create_dir_all(&config.current_dir())?;

        let archived = match marker.version() {
            Some(current) => Some(archive_current(config, current)?),
            None => None,
        };

        let staged_marker = format!("{}{}", kind.label(), version);
        write_file(&config.marker_path(), &staged_marker)?;
        debug!("Staged marker '{}'", staged_marker);

        let populated = match kind {
            ServerKind::Vanilla => self.create_vanilla(&version, resolved, options).await?,
            ServerKind::Spigot => self.create_spigot(&version, options).await?,
        };

        let marker = read_marker(config)?
            .version()
            .map(str::to_string)
            .unwrap_or(staged_marker);

        info!(
            "Installed {} {} into {}",
            kind,
            version,
            config.current_dir().display()
        );
        Ok(InstallReport {
            version,
            kind,
            marker,
            current_dir: config.current_dir(),
            archived,
            jar: populated.jar,
            launch_script: populated.launch_script,
        })
    }

    async fn resolve_exact(
        &self,
        version: &str,
        resolved: Option<ResolvedVersion>,
    ) -> Result<ResolvedVersion> {
        match resolved {
            Some(r) => Ok(r),
            None => {
                self.manifest
                    .resolve(&VersionRequest::Exact(version.to_string()))
                    .await
            }
        }
    }

    /// `eula.txt` (when accepted) and the launch script, shared by every kind.
    fn finish_installation(&self, options: &InstallOptions, jar_name: &str) -> Result<PathBuf> {
        let current = self.config.current_dir();
        if options.accept_eula {
            write_file(&self.config.eula_path(), EULA_ACCEPTED)?;
        }
        write_launch_script(&self.config, &current, options.ram_mb, jar_name)
    }
}

fn write_launch_script(config: &Config, dir: &Path, ram_mb: u32, jar_name: &str) -> Result<PathBuf> {
    let script = config.script_platform.render(ram_mb, jar_name);
    let path = dir.join(script.file_name);
    write_file(&path, &script.contents)?;
    if script.executable {
        set_mode(&path, 0o755)?;
    }
    debug!("Wrote launch script {}", path.display());
    Ok(path)
}
