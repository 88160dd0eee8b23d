// msm-core/src/install/vanilla.rs
use msm_common::error::Result;
use msm_common::model::{InstallOptions, ServerKind};
use msm_net::ResolvedVersion;
use tracing::debug;

use super::{InstallationManager, Populated};
use crate::fs::write_file;

impl InstallationManager {
    /// Official jar straight from the launcher metadata.
    pub(super) async fn create_vanilla(
        &self,
        version: &str,
        resolved: Option<ResolvedVersion>,
        options: &InstallOptions,
    ) -> Result<Populated> {
        let config = &self.config;
        let resolved = self.resolve_exact(version, resolved).await?;
        let jar_bytes = self
            .fetcher
            .fetch(ServerKind::Vanilla, Some(&resolved.metadata_url))
            .await?;
        let jar_name = options.jar_name();

        // Vanilla records the bare version, replacing the staged marker.
        write_file(&config.marker_path(), &resolved.id)?;

        let jar = config.current_dir().join(&jar_name);
        write_file(&jar, &jar_bytes)?;
        debug!("Wrote {} ({} bytes)", jar.display(), jar_bytes.len());

        let launch_script = self.finish_installation(options, &jar_name)?;
        Ok(Populated { jar, launch_script })
    }
}
