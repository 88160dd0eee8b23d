// msm/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser, Subcommand};
use msm_common::error::Result;
use msm_common::Config;

pub mod history;
pub mod install;
pub mod status;
pub mod versions;

use crate::cli::history::History;
use crate::cli::install::InstallArgs;
use crate::cli::status::Status;
use crate::cli::versions::Versions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "msm", bin_name = "msm")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Archive the current server and install a new one
    Install(InstallArgs),
    /// List versions published in the launcher manifest
    Versions(Versions),
    /// Show what is installed right now
    Status(Status),
    /// List archived installations
    History(History),
}

impl Command {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Install(command) => command.run(config).await,
            Self::Versions(command) => command.run(config).await,
            Self::Status(command) => command.run(config),
            Self::History(command) => command.run(config),
        }
    }
}
