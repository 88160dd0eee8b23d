// msm/src/main.rs
use std::fs;
use std::process;

use clap::Parser;
use colored::Colorize;
use msm_common::config::Config;
use msm_common::error::MsmError;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod ui;

use cli::CliArgs;

fn init_logging(config: &Config, verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let max_log_level = level_filter.into_level().unwrap_or(tracing::Level::INFO);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("MSM_LOG")
        .from_env_lossy();

    let log_dir = config.logs_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!(
            "{} Failed to create log directory {}: {}",
            "Error:".red().bold(),
            log_dir.display(),
            e
        );
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .try_init();
    } else if verbose > 0 {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "msm.log");
        let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

        let stderr_writer = std::io::stderr.with_max_level(max_log_level);
        let file_writer = non_blocking_appender.with_max_level(max_log_level);

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(stderr_writer.and(file_writer))
            .with_ansi(true)
            .without_time()
            .try_init();

        // The appender flushes on drop; keep it for the life of the process.
        Box::leak(Box::new(guard));

        debug!(
            "Verbose logging enabled. Writing logs to: {}/msm.log",
            log_dir.display()
        );
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .try_init();
    }
}

/// The line printed for a failure that ends the process.
fn error_line(err: &MsmError) -> String {
    format!("{}: {:#}", "Error".red().bold(), err)
}

fn exit_with(err: &MsmError) -> ! {
    eprintln!("{}", error_line(err));
    process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    init_logging(&config, cli_args.verbose);
    debug!("Using msm root {}", config.root().display());

    if let Err(e) = cli_args.command.run(&config).await {
        error!("Command failed: {:#}", e);
        exit_with(&e);
    }

    debug!("Command completed successfully.");
}
