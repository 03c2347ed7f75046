//! Error types for the test desk core library
//!
//! Each concern has its own error enum; [`TestDeskError`] wraps them for
//! callers that only need a single error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while compiling a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern string is empty
    #[error("route pattern is empty")]
    Empty,

    /// Hash routes must start with `#`
    #[error("route pattern must start with '#': {0}")]
    MissingHash(String),

    /// The same parameter name appears twice in one pattern
    #[error("duplicate parameter '{name}' in route pattern: {pattern}")]
    DuplicateParameter {
        /// Offending pattern
        pattern: String,
        /// Repeated parameter name
        name: String,
    },

    /// The generated expression was rejected by the regex engine
    #[error("failed to compile route pattern {pattern}: {reason}")]
    Compile {
        /// Offending pattern
        pattern: String,
        /// Regex engine message
        reason: String,
    },
}

/// Errors raised while registering or running routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Invalid route pattern
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A route with the same pattern is already registered
    #[error("route already registered: {0}")]
    DuplicateRoute(String),

    /// A tab template references a parameter the pattern does not capture
    #[error("route {pattern} uses unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder {
        /// Route pattern
        pattern: String,
        /// Placeholder name without braces
        placeholder: String,
    },

    /// `configure` was called on a table that is already configured
    #[error("route table is already configured")]
    AlreadyConfigured,

    /// `run` was called before `configure`
    #[error("route table has not been configured")]
    NotConfigured,

    /// The engine was asked to dispatch before being activated
    #[error("router is not running")]
    NotRunning,

    /// Routes can no longer be changed once the engine runs
    #[error("router is already running on {0}")]
    AlreadyRunning(String),

    /// Mount point selector is empty
    #[error("mount point must not be empty")]
    EmptyMountPoint,

    /// Start location is not a hash location
    #[error("start location must start with '#': {0}")]
    InvalidStartLocation(String),
}

/// Errors related to loading and saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write a settings file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings file
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// Settings are structurally valid TOML but semantically wrong
    #[error("Invalid settings: {0}")]
    Validation(String),

    /// No configuration directory could be determined for this user
    #[error("Configuration directory not found")]
    NoConfigDir,
}

/// Top-level error type for the library
#[derive(Debug, Error)]
pub enum TestDeskError {
    /// Routing error
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for routing operations
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
