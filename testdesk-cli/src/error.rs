//! CLI error types and exit codes.

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, routing or I/O errors
    pub const GENERAL_ERROR: i32 = 1;
    /// A dispatched location matched no route while `--strict` was given
    pub const NO_MATCH: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Routing error
    #[error("Routing error: {0}")]
    Routing(String),

    /// Output could not be produced
    #[error("Output error: {0}")]
    Output(String),

    /// No route matched in strict mode
    #[error("No route matches {0}")]
    NoMatch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<testdesk_core::error::TestDeskError> for CliError {
    fn from(err: testdesk_core::error::TestDeskError) -> Self {
        use testdesk_core::error::TestDeskError;
        match err {
            TestDeskError::Config(e) => Self::Config(e.to_string()),
            TestDeskError::Routing(e) => Self::Routing(e.to_string()),
        }
    }
}

impl From<testdesk_core::error::ConfigError> for CliError {
    fn from(err: testdesk_core::error::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<testdesk_core::error::RoutingError> for CliError {
    fn from(err: testdesk_core::error::RoutingError) -> Self {
        Self::Routing(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoMatch(_) => exit_codes::NO_MATCH,
            Self::Config(_) | Self::Routing(_) | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
