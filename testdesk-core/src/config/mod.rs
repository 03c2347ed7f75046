//! Configuration management for the test desk router
//!
//! Route tables are stored as TOML in the user's configuration directory.
//! When no file exists the built-in routes are used.

mod manager;
mod settings;

pub use manager::{CONFIG_DIR_NAME, ConfigManager, ROUTES_FILE_NAME};
pub use settings::RoutingSettings;
