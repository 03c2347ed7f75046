//! Shared utility functions used across command modules.

use std::path::Path;

use testdesk_core::config::{ConfigManager, RoutingSettings};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads routing settings from the config directory, or the built-in routes
/// when no route file exists.
pub fn load_settings(config_path: Option<&Path>) -> Result<RoutingSettings, CliError> {
    let manager = create_config_manager(config_path)?;
    manager
        .load_routing_settings()
        .map_err(|e| CliError::Config(format!("Failed to load routes: {e}")))
}
