//! CLI argument parsing types using `clap`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use testdesk_core::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Test desk command-line interface for the hash-route table
#[derive(Parser)]
#[command(name = "testdesk-cli")]
#[command(author, version, about = "Test desk route table command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "TESTDESK_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to a file instead of stderr (`-` writes to stdout)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, replacing the level chosen by -v
    #[arg(long, global = true, env = "TESTDESK_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Tracing setup requested by the global flags.
    ///
    /// `--quiet` disables logging unless a log file is given.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        let output = match self.log_file.as_deref() {
            None if self.quiet => return None,
            None => TracingOutput::Stderr,
            Some(path) if path == Path::new("-") => TracingOutput::Stdout,
            Some(path) => TracingOutput::File {
                path: path.to_path_buf(),
            },
        };
        let mut config = TracingConfig::new()
            .with_level(TracingLevel::from_verbosity(self.verbose))
            .with_output(output);
        if let Some(filter) = &self.log_filter {
            config = config.with_filter(filter.clone());
        }
        Some(config)
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the configured routes
    #[command(about = "List the routes of the route table")]
    Routes {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: RoutesFormat,
    },

    /// Dispatch one or more locations through the route table
    #[command(about = "Show which tabs a sequence of locations would open")]
    Dispatch {
        /// Locations to visit in order; the first one is the page's
        /// initial location (full URLs and bare fragments are accepted)
        #[arg(required = true, value_name = "LOCATION")]
        locations: Vec<String>,

        /// Override the start location used when the first location has
        /// no fragment
        #[arg(long, value_name = "LOCATION")]
        start: Option<String>,

        /// Exit with status 2 if any location matches no route
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: DispatchFormat,
    },

    /// Write the built-in route table to the configuration directory
    #[command(about = "Create routes.toml with the built-in routes")]
    Init {
        /// Overwrite an existing route file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output formats for `routes`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoutesFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
    /// Output as a route file
    Toml,
}

/// Output formats for `dispatch`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DispatchFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}
