//! Loading and saving of settings files

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::settings::RoutingSettings;

/// Name of the application directory under the user config directory
pub const CONFIG_DIR_NAME: &str = "testdesk";

/// File holding the route table
pub const ROUTES_FILE_NAME: &str = "routes.toml";

/// Reads and writes settings under one configuration directory
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the user's default configuration directory
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has no config
    /// directory for the current user.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(CONFIG_DIR_NAME)))
    }

    /// Creates a manager for an explicit directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// The configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the route table file
    #[must_use]
    pub fn routes_path(&self) -> PathBuf {
        self.config_dir.join(ROUTES_FILE_NAME)
    }

    /// Returns true if a route table file exists
    #[must_use]
    pub fn routes_file_exists(&self) -> bool {
        self.routes_path().is_file()
    }

    /// Loads routing settings, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load_routing_settings(&self) -> ConfigResult<RoutingSettings> {
        let path = self.routes_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No route file, using built-in routes");
            return Ok(RoutingSettings::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings: RoutingSettings =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;

        tracing::debug!(
            path = %path.display(),
            routes = settings.routes.len(),
            "Loaded route file"
        );
        Ok(settings)
    }

    /// Validates and writes routing settings, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, serialization or writing fails.
    pub fn save_routing_settings(&self, settings: &RoutingSettings) -> ConfigResult<()> {
        settings.validate()?;
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;

        let content = toml::to_string_pretty(settings)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        let path = self.routes_path();
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "Saved route file");
        Ok(())
    }
}
