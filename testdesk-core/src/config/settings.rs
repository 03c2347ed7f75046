//! Routing settings persisted as TOML

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, RoutingError, RoutingResult};
use crate::routing::{
    DEFAULT_MOUNT_POINT, DEFAULT_START_LOCATION, RouteDefinition, application_routes,
};

fn default_mount_point() -> String {
    DEFAULT_MOUNT_POINT.to_string()
}

fn default_start_location() -> String {
    DEFAULT_START_LOCATION.to_string()
}

/// Mount point, start location and route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Selector of the element the router is bound to
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
    /// Location dispatched when the page is opened without a fragment.
    /// Empty disables the redirect.
    #[serde(default = "default_start_location")]
    pub start_location: String,
    /// Routes in registration order
    #[serde(default = "application_routes")]
    pub routes: Vec<RouteDefinition>,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            start_location: default_start_location(),
            routes: application_routes(),
        }
    }
}

impl RoutingSettings {
    /// Sets the mount point
    #[must_use]
    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = mount_point.into();
        self
    }

    /// Sets the start location
    #[must_use]
    pub fn with_start_location(mut self, start_location: impl Into<String>) -> Self {
        self.start_location = start_location.into();
        self
    }

    /// Replaces the route list
    #[must_use]
    pub fn with_routes(mut self, routes: Vec<RouteDefinition>) -> Self {
        self.routes = routes;
        self
    }

    /// Validates every route and rejects repeated patterns.
    ///
    /// # Errors
    ///
    /// Returns the first invalid route's error.
    pub fn check_routes(&self) -> RoutingResult<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            route.validate()?;
            if seen.contains(&route.pattern.as_str()) {
                return Err(RoutingError::DuplicateRoute(route.pattern.clone()));
            }
            seen.push(&route.pattern);
        }
        Ok(())
    }

    /// Checks the mount point, the start location and every route.
    ///
    /// This is the part of [`RoutingSettings::validate`] the route table
    /// enforces before registering anything.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::EmptyMountPoint`],
    /// [`RoutingError::InvalidStartLocation`] or the first invalid route's
    /// error.
    pub fn check(&self) -> RoutingResult<()> {
        if self.mount_point.trim().is_empty() {
            return Err(RoutingError::EmptyMountPoint);
        }
        if !self.start_location.is_empty() && !self.start_location.starts_with('#') {
            return Err(RoutingError::InvalidStartLocation(
                self.start_location.clone(),
            ));
        }
        self.check_routes()
    }

    /// Validates the whole settings block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first problem.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.routes.is_empty() {
            return Err(ConfigError::Validation(
                "at least one route is required".to_string(),
            ));
        }
        self.check()
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}
