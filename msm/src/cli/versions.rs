use clap::Args;
use colored::Colorize;
use msm_common::config::Config;
use msm_common::error::Result;
use msm_net::ManifestClient;
use prettytable::{format, Cell, Row, Table};

use crate::ui;

#[derive(Args, Debug)]
pub struct Versions {
    /// Include snapshots and old alpha/beta builds
    #[arg(long)]
    pub all: bool,
}

impl Versions {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let manifest = ManifestClient::from_config(config)?;
        let pb = ui::create_spinner("Fetching version manifest");
        let index = manifest.fetch_index().await;
        pb.finish_and_clear();
        let index = index?;

        let latest = index.latest_release();
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.add_row(Row::new(vec![
            Cell::new("Version").style_spec("b"),
            Cell::new("Type").style_spec("b"),
            Cell::new("Latest?").style_spec("b"),
        ]));

        let mut shown = 0;
        for entry in index.entries() {
            if !self.all && !entry.is_release() {
                continue;
            }
            let is_latest = entry.id == latest;
            table.add_row(Row::new(vec![
                if is_latest {
                    Cell::new(&entry.id).style_spec("Fgb")
                } else {
                    Cell::new(&entry.id)
                },
                Cell::new(entry.release_type.as_deref().unwrap_or("-")),
                Cell::new(if is_latest { "✔" } else { "" }),
            ]));
            shown += 1;
        }

        if shown == 0 {
            println!("{}", "No versions listed in the manifest".yellow());
            return Ok(());
        }
        table.printstd();
        println!(
            "{}",
            format!("{shown} versions, latest release {latest}").bold()
        );
        Ok(())
    }
}
