// msm/src/cli/install.rs
use clap::Args;
use colored::Colorize;
use msm_common::config::Config;
use msm_common::error::Result;
use msm_common::model::{InstallOptions, ServerKind, VersionRequest, LATEST};
use msm_core::InstallationManager;
use tracing::instrument;

use crate::ui;

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Version id to install, or LATEST for the newest release
    #[arg(id = "version_id", value_name = "VERSION", default_value = LATEST)]
    pub version: VersionRequest,

    /// Server flavour: vanilla or spigot
    #[arg(long, default_value = "vanilla")]
    pub kind: ServerKind,

    /// Heap size in megabytes written into the launch script
    #[arg(long, default_value_t = 1024)]
    pub ram: u32,

    /// Name of the server jar inside the installation
    #[arg(long, default_value = "server.jar")]
    pub jar: String,

    /// Do not write an accepted eula.txt
    #[arg(long)]
    pub no_eula: bool,
}

impl InstallArgs {
    pub fn options(&self) -> InstallOptions {
        InstallOptions {
            ram_mb: self.ram,
            executable_name: self.jar.clone(),
            accept_eula: !self.no_eula,
        }
    }

    #[instrument(skip(self, config), fields(version = %self.version, kind = %self.kind))]
    pub async fn run(&self, config: &Config) -> Result<()> {
        let manager = InstallationManager::new(config.clone())?;

        let pb = ui::create_spinner(&format!("Installing {} {}", self.kind, self.version));
        let result = manager
            .install_new_version(&self.version, self.kind, &self.options())
            .await;
        pb.finish_and_clear();
        let report = result?;

        if let Some(archived) = &report.archived {
            println!(
                "{} previous installation to {}",
                "Archived".cyan(),
                archived.display()
            );
        }
        ui::headline(&format!(
            "Installed {} {} into {}",
            report.kind,
            report.version,
            report.current_dir.display()
        ));
        println!("  jar:    {}", report.jar.display());
        println!("  launch: {}", report.launch_script.display());
        if self.no_eula {
            println!(
                "{}",
                "EULA not accepted; edit eula.txt before starting the server.".yellow()
            );
        }
        Ok(())
    }
}
