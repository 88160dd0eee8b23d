//! Small terminal helpers shared by the subcommands.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// A blue spinner ticking every 100ms next to `message`.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prints a `==> ` headline.
pub fn headline(message: &str) {
    println!("{}{}", "==> ".bold().blue(), message.bold());
}
