//! Routing engine seam and the hash router that implements it
//!
//! [`RouteEngine`] is the minimal surface the route table needs: register a
//! pattern with a handler, then activate on a mount point. [`HashRouter`] is
//! the in-process implementation. It matches locations against registered
//! patterns in registration order and forwards the tab request returned by
//! the winning handler to its [`TabManager`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};
use crate::tab::{TabManager, TabRequest};
use crate::tracing::span_names;

use super::context::{RouteContext, RouteParams};
use super::location::{Location, decode_component};
use super::pattern::RoutePattern;

/// Handler bound to a route.
///
/// Returns the tab to open, if any.
pub type RouteHandler = Box<dyn Fn(&mut RouteContext<'_>) -> Option<TabRequest>>;

/// Registration and activation surface of a hash-routing engine.
pub trait RouteEngine {
    /// Registers a handler for a pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid, already registered, or
    /// the engine is already running.
    fn register_route(&mut self, pattern: &str, handler: RouteHandler) -> RoutingResult<()>;

    /// Binds the engine to `mount_point` and dispatches the initial location.
    ///
    /// When `current` has no fragment and `start` is given, `start` is
    /// dispatched instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the mount point is empty or the engine is already
    /// running.
    fn activate(
        &mut self,
        mount_point: &str,
        start: Option<&str>,
        current: &str,
    ) -> RoutingResult<DispatchOutcome>;

    /// Registered patterns in registration order
    fn patterns(&self) -> Vec<&RoutePattern>;
}

/// Details of a matched navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    /// Location that was dispatched
    pub location: String,
    /// Pattern of the route that handled it
    pub pattern: String,
    /// Decoded path and query parameters
    pub params: RouteParams,
    /// Diagnostics logged by the handler
    pub messages: Vec<String>,
    /// Tab request forwarded to the tab manager
    pub tab: Option<TabRequest>,
}

/// Result of dispatching one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// A route matched and its handler ran
    Matched(RouteMatch),
    /// No route matched; nothing was opened
    NotFound {
        /// Location that was dispatched
        location: String,
    },
    /// The location equals the last dispatched one; no handler ran
    Unchanged {
        /// Location that was ignored
        location: String,
    },
}

impl DispatchOutcome {
    /// Tab request produced by this dispatch, if any
    #[must_use]
    pub fn tab(&self) -> Option<&TabRequest> {
        match self {
            Self::Matched(m) => m.tab.as_ref(),
            Self::NotFound { .. } | Self::Unchanged { .. } => None,
        }
    }

    /// Returns true if a route handled the location
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The dispatched location
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Matched(m) => &m.location,
            Self::NotFound { location } | Self::Unchanged { location } => location,
        }
    }

    /// Kind of outcome without details
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Matched(_) => OutcomeKind::Matched,
            Self::NotFound { .. } => OutcomeKind::NotFound,
            Self::Unchanged { .. } => OutcomeKind::Unchanged,
        }
    }
}

/// Outcome discriminant kept in navigation history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// A route matched
    Matched,
    /// No route matched
    NotFound,
    /// Location was not dispatched again
    Unchanged,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched => write!(f, "matched"),
            Self::NotFound => write!(f, "not found"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// One entry of the router's navigation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRecord {
    /// Dispatched location
    pub location: String,
    /// What happened
    pub outcome: OutcomeKind,
    /// When it was dispatched
    pub at: DateTime<Utc>,
}

struct Route {
    pattern: RoutePattern,
    handler: RouteHandler,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// In-process hash router.
///
/// Routes are tried in registration order and the first match wins.
/// Location changes are only dispatched once the router has been activated.
pub struct HashRouter<T: TabManager> {
    tabs: T,
    routes: Vec<Route>,
    mount_point: Option<String>,
    last_location: Option<Location>,
    history: Vec<NavigationRecord>,
}

impl<T: TabManager> HashRouter<T> {
    /// Creates an idle router forwarding tab requests to `tabs`
    #[must_use]
    pub fn new(tabs: T) -> Self {
        Self {
            tabs,
            routes: Vec::new(),
            mount_point: None,
            last_location: None,
            history: Vec::new(),
        }
    }

    /// Returns true once [`RouteEngine::activate`] succeeded
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mount_point.is_some()
    }

    /// Mount point selector, if running
    #[must_use]
    pub fn mount_point(&self) -> Option<&str> {
        self.mount_point.as_deref()
    }

    /// Number of registered routes
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// The injected tab manager
    #[must_use]
    pub fn tabs(&self) -> &T {
        &self.tabs
    }

    /// Mutable access to the injected tab manager
    pub fn tabs_mut(&mut self) -> &mut T {
        &mut self.tabs
    }

    /// Consumes the router and returns its tab manager
    pub fn into_tabs(self) -> T {
        self.tabs
    }

    /// Last dispatched location
    #[must_use]
    pub fn last_location(&self) -> Option<&Location> {
        self.last_location.as_ref()
    }

    /// Dispatch history, oldest first
    #[must_use]
    pub fn history(&self) -> &[NavigationRecord] {
        &self.history
    }

    /// Handles a change of the browser location.
    ///
    /// A location equal to the last dispatched one is reported as
    /// [`DispatchOutcome::Unchanged`] without running any handler.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::NotRunning`] before activation.
    pub fn handle_location_change(&mut self, location: &str) -> RoutingResult<DispatchOutcome> {
        if !self.is_running() {
            return Err(RoutingError::NotRunning);
        }
        let location = Location::parse(location);
        if self.last_location.as_ref() == Some(&location) {
            tracing::debug!(location = %location, "Location unchanged, skipping dispatch");
            return Ok(DispatchOutcome::Unchanged {
                location: location.as_str().to_string(),
            });
        }
        Ok(self.dispatch(location))
    }

    /// Dispatches the last location again, even though it did not change.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::NotRunning`] before activation.
    pub fn refresh(&mut self) -> RoutingResult<DispatchOutcome> {
        if !self.is_running() {
            return Err(RoutingError::NotRunning);
        }
        let location = self.last_location.clone().unwrap_or_default();
        Ok(self.dispatch(location))
    }

    fn dispatch(&mut self, location: Location) -> DispatchOutcome {
        let mount_point = self.mount_point.as_deref().unwrap_or_default();

        let found = self.routes.iter().find_map(|route| {
            route
                .pattern
                .captures(location.path())
                .map(|captures| (route, collect_params(&location, &captures)))
        });

        let outcome = match found {
            Some((route, params)) => {
                let span = crate::trace_operation!(
                    span_names::ROUTE_DISPATCH,
                    mount = %mount_point,
                    route = %route.pattern
                );
                let _guard = span.enter();

                let mut ctx = RouteContext::new(mount_point, &route.pattern, &location, params);
                let tab = (route.handler)(&mut ctx);
                if let Some(request) = &tab {
                    self.tabs.add_tab(request);
                }
                let (params, messages) = ctx.into_parts();

                DispatchOutcome::Matched(RouteMatch {
                    location: location.as_str().to_string(),
                    pattern: route.pattern.as_str().to_string(),
                    params,
                    messages,
                    tab,
                })
            }
            None => {
                tracing::debug!(mount = %mount_point, location = %location, "No route matched");
                DispatchOutcome::NotFound {
                    location: location.as_str().to_string(),
                }
            }
        };

        self.history.push(NavigationRecord {
            location: location.as_str().to_string(),
            outcome: outcome.kind(),
            at: Utc::now(),
        });
        self.last_location = Some(location);
        outcome
    }
}

/// Query pairs first, then decoded path captures so that path values win.
/// A repeated query key keeps its last value.
fn collect_params(location: &Location, captures: &[(&str, &str)]) -> RouteParams {
    let mut params: RouteParams = location.query_pairs().into_iter().collect();
    for (name, raw) in captures {
        params.insert((*name).to_string(), decode_component(raw));
    }
    params
}

impl<T: TabManager> RouteEngine for HashRouter<T> {
    fn register_route(&mut self, pattern: &str, handler: RouteHandler) -> RoutingResult<()> {
        if let Some(mount) = &self.mount_point {
            return Err(RoutingError::AlreadyRunning(mount.clone()));
        }
        let pattern = RoutePattern::parse(pattern)?;
        if self.routes.iter().any(|r| r.pattern == pattern) {
            return Err(RoutingError::DuplicateRoute(pattern.as_str().to_string()));
        }
        tracing::debug!(route = %pattern, params = ?pattern.params(), "Route registered");
        self.routes.push(Route { pattern, handler });
        Ok(())
    }

    fn activate(
        &mut self,
        mount_point: &str,
        start: Option<&str>,
        current: &str,
    ) -> RoutingResult<DispatchOutcome> {
        if mount_point.trim().is_empty() {
            return Err(RoutingError::EmptyMountPoint);
        }
        if let Some(mount) = &self.mount_point {
            return Err(RoutingError::AlreadyRunning(mount.clone()));
        }

        let _span = crate::trace_operation!(
            span_names::ROUTER_ACTIVATE,
            mount = %mount_point,
            routes = self.routes.len()
        )
        .entered();

        self.mount_point = Some(mount_point.to_string());

        let mut location = Location::parse(current);
        if location.is_empty() {
            if let Some(start) = start {
                location = Location::parse(start);
            }
        }
        tracing::info!(mount = %mount_point, location = %location, "Router started");
        Ok(self.dispatch(location))
    }

    fn patterns(&self) -> Vec<&RoutePattern> {
        self.routes.iter().map(|r| &r.pattern).collect()
    }
}

impl<T: TabManager + fmt::Debug> fmt::Debug for HashRouter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRouter")
            .field("tabs", &self.tabs)
            .field("routes", &self.routes)
            .field("mount_point", &self.mount_point)
            .field("last_location", &self.last_location)
            .finish_non_exhaustive()
    }
}
