//! The application route table
//!
//! [`RouteTable`] registers the test desk routes on a [`RouteEngine`] once
//! and then starts it. [`application_routes`] lists the built-in routes.

use crate::config::RoutingSettings;
use crate::error::{RoutingError, RoutingResult};

use super::definition::{RouteDefinition, TabTarget};
use super::engine::{DispatchOutcome, RouteEngine};

/// Default mount point selector
pub const DEFAULT_MOUNT_POINT: &str = "#main";

/// Location dispatched on start when the browser has no fragment
pub const DEFAULT_START_LOCATION: &str = "#main";

/// Built-in test desk routes
#[must_use]
pub fn application_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::log_only("#main", "MAIN"),
        RouteDefinition::open_tab(
            "#/test_details/:ID",
            "NEW",
            TabTarget::new("TEST ID : {ID}", "/test_details/{ID}"),
        ),
        RouteDefinition::open_tab(
            "#/schedule_new_test",
            "#/schedule_new_test",
            TabTarget::new("Scheduling New Test", "/schedule_new_test"),
        ),
        RouteDefinition::open_tab(
            "#/search_test",
            "#/search_test",
            TabTarget::new("Test Search", "/search_test"),
        ),
        RouteDefinition::open_tab(
            "#/report/test_status",
            "#/report/all_test",
            TabTarget::new("Report - All Tests", "/report/test_status"),
        ),
        RouteDefinition::open_tab(
            "#/help",
            "#/help",
            TabTarget::new("Help Page", "/help").exclusive(),
        ),
    ]
}

/// Registers routes on an engine and starts it.
///
/// A table configures exactly once; a second [`RouteTable::configure`]
/// fails instead of registering every route twice.
#[derive(Debug, Clone)]
pub struct RouteTable {
    settings: RoutingSettings,
    configured: bool,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(RoutingSettings::default())
    }
}

impl RouteTable {
    /// Creates an unconfigured table
    #[must_use]
    pub fn new(settings: RoutingSettings) -> Self {
        Self {
            settings,
            configured: false,
        }
    }

    /// Settings the table was built from
    #[must_use]
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Route definitions in registration order
    #[must_use]
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.settings.routes
    }

    /// Returns true after a successful [`RouteTable::configure`]
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Registers every route on `engine`.
    ///
    /// The settings are checked as a whole before the first registration, so
    /// an invalid table leaves the engine untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::AlreadyConfigured`] on a second call, the
    /// first error from [`RoutingSettings::check`], or a registration error.
    pub fn configure<E: RouteEngine + ?Sized>(&mut self, engine: &mut E) -> RoutingResult<()> {
        if self.configured {
            return Err(RoutingError::AlreadyConfigured);
        }
        self.settings.check()?;
        for route in &self.settings.routes {
            engine.register_route(&route.pattern, route.handler())?;
        }
        self.configured = true;
        tracing::info!(
            mount = %self.settings.mount_point,
            routes = self.settings.routes.len(),
            "Routes configured"
        );
        Ok(())
    }

    /// Starts `engine` on the configured mount point and dispatches
    /// `current_location`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::NotConfigured`] before
    /// [`RouteTable::configure`], or the engine's activation error.
    pub fn run<E: RouteEngine + ?Sized>(
        &self,
        engine: &mut E,
        current_location: &str,
    ) -> RoutingResult<DispatchOutcome> {
        if !self.configured {
            return Err(RoutingError::NotConfigured);
        }
        let start = Some(self.settings.start_location.as_str()).filter(|s| !s.is_empty());
        engine.activate(&self.settings.mount_point, start, current_location)
    }
}

/// Configures `engine` with the routes from `settings`.
///
/// Returns the configured table, which is needed to run it.
///
/// # Errors
///
/// See [`RouteTable::configure`].
pub fn configure_routes<E: RouteEngine + ?Sized>(
    engine: &mut E,
    settings: RoutingSettings,
) -> RoutingResult<RouteTable> {
    let mut table = RouteTable::new(settings);
    table.configure(engine)?;
    Ok(table)
}

/// Starts `engine` through a configured table.
///
/// # Errors
///
/// See [`RouteTable::run`].
pub fn run_routes<E: RouteEngine + ?Sized>(
    table: &RouteTable,
    engine: &mut E,
    current_location: &str,
) -> RoutingResult<DispatchOutcome> {
    table.run(engine, current_location)
}
