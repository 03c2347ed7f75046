//! Per-navigation route context

use std::collections::BTreeMap;

use super::location::Location;
use super::pattern::RoutePattern;

/// Matched parameter values by name
pub type RouteParams = BTreeMap<String, String>;

/// State handed to a route handler for one matched navigation.
///
/// Created by the engine when a location matches and dropped once the
/// handler returns. Messages passed to [`RouteContext::log`] are emitted as
/// tracing events and collected into the dispatch outcome.
#[derive(Debug)]
pub struct RouteContext<'a> {
    mount_point: &'a str,
    pattern: &'a RoutePattern,
    location: &'a Location,
    params: RouteParams,
    messages: Vec<String>,
}

impl<'a> RouteContext<'a> {
    /// Creates a context for a matched route
    #[must_use]
    pub fn new(
        mount_point: &'a str,
        pattern: &'a RoutePattern,
        location: &'a Location,
        params: RouteParams,
    ) -> Self {
        Self {
            mount_point,
            pattern,
            location,
            params,
            messages: Vec::new(),
        }
    }

    /// Value of a matched parameter
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// All matched parameters
    #[must_use]
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// The pattern that matched
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        self.pattern
    }

    /// The location being dispatched
    #[must_use]
    pub fn location(&self) -> &Location {
        self.location
    }

    /// Selector of the element the router is mounted on
    #[must_use]
    pub fn mount_point(&self) -> &str {
        self.mount_point
    }

    /// Logs a navigation diagnostic
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(
            mount = %self.mount_point,
            route = %self.pattern,
            "{message}"
        );
        self.messages.push(message);
    }

    /// Diagnostics logged so far
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub(crate) fn into_parts(self) -> (RouteParams, Vec<String>) {
        (self.params, self.messages)
    }
}
