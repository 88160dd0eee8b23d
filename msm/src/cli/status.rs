// msm/src/cli/status.rs
use clap::Args;
use colored::Colorize;
use msm_common::config::Config;
use msm_common::error::Result;
use msm_core::{installation_state, list_history, read_marker, CurrentMarker, InstallationState};

#[derive(Args, Debug)]
pub struct Status;

impl Status {
    pub fn run(&self, config: &Config) -> Result<()> {
        let marker = read_marker(config)?;
        let state = installation_state(config)?;
        let history = list_history(config)?;

        let marker_text = match &marker {
            CurrentMarker::Absent => "none".dimmed().to_string(),
            CurrentMarker::Unmarked => "unmarked".yellow().to_string(),
            CurrentMarker::Marked(version) => version.bold().to_string(),
        };
        let state_text = match state {
            InstallationState::Empty => "empty".dimmed(),
            InstallationState::Staged => "staged (incomplete install)".yellow(),
            InstallationState::Populated => "populated".green(),
        };

        println!("{:<10} {}", "Root:".bold(), config.root().display());
        println!("{:<10} {}", "Current:".bold(), marker_text);
        println!("{:<10} {}", "State:".bold(), state_text);
        println!("{:<10} {}", "History:".bold(), history.len());
        Ok(())
    }
}
