//! Route file creation command.

use std::path::Path;

use testdesk_core::config::RoutingSettings;

use crate::error::CliError;
use crate::util::create_config_manager;

/// Init command handler
pub fn cmd_init(config_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;
    let path = manager.routes_path();

    if manager.routes_file_exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    manager.save_routing_settings(&RoutingSettings::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}
