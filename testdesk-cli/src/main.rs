//! Test desk CLI - drives the hash-route table from the command line
//!
//! Lists the configured routes, dispatches locations against a recording
//! tab manager, writes the default route file and generates shell
//! completions.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use testdesk_core::tracing::init_tracing;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    if let Some(config) = cli.tracing_config() {
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
