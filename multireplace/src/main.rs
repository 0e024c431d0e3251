// multireplace/src/main.rs
//! multireplace entry point.

use clap::Parser;
use log::{info, LevelFilter};

use multireplace::cli::Cli;
use multireplace::commands::{self, error_msg};
use multireplace::logger;

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("multireplace started. Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = commands::run(cli.command, cli.quiet) {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}
