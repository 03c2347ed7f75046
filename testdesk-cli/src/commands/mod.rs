//! Command handler modules for the CLI.

mod completions;
mod dispatch;
mod init;
mod routes;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Routes { format } => routes::cmd_routes(config_path, format),
        Commands::Dispatch {
            locations,
            start,
            strict,
            format,
        } => dispatch::cmd_dispatch(
            config_path,
            &dispatch::DispatchParams {
                locations: &locations,
                start: start.as_deref(),
                strict,
                format,
            },
        ),
        Commands::Init { force } => init::cmd_init(config_path, force),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
