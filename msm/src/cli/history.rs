use clap::Args;
use colored::Colorize;
use msm_common::config::Config;
use msm_common::error::Result;
use msm_core::list_history;
use prettytable::{format, Cell, Row, Table};

#[derive(Args, Debug)]
pub struct History;

impl History {
    pub fn run(&self, config: &Config) -> Result<()> {
        let entries = list_history(config)?;
        if entries.is_empty() {
            println!("{}", "No archived installations".yellow());
            return Ok(());
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.add_row(Row::new(vec![
            Cell::new("Entry").style_spec("b"),
            Cell::new("Version").style_spec("b"),
        ]));
        for entry in &entries {
            table.add_row(Row::new(vec![
                Cell::new(&entry.name).style_spec("Fb"),
                Cell::new(entry.version.as_deref().unwrap_or("-")),
            ]));
        }
        table.printstd();
        println!(
            "{}",
            format!(
                "{} archived installations in {}",
                entries.len(),
                config.previous_dir().display()
            )
            .bold()
        );
        Ok(())
    }
}
