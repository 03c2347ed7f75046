//! Declarative route definitions
//!
//! A [`RouteDefinition`] describes what a route does: the diagnostic to log
//! and, optionally, the tab to open. Title and URL are templates in which
//! `{NAME}` is replaced by the matched value of parameter `NAME`. Values are
//! inserted as they arrive; nothing is validated or escaped.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};
use crate::tab::TabRequest;

use super::context::RouteContext;
use super::engine::RouteHandler;
use super::pattern::RoutePattern;

/// Matches `{NAME}` placeholders in tab templates
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// Tab opened by a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabTarget {
    /// Title template
    pub title: String,
    /// URL template
    pub url: String,
    /// Exclusive flag passed through to the tab manager
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclusive: bool,
}

impl TabTarget {
    /// Creates a non-exclusive target
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            exclusive: false,
        }
    }

    /// Marks the target exclusive
    #[must_use]
    pub const fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Fills the templates from the context parameters.
    ///
    /// Placeholders without a matching parameter are left as written.
    #[must_use]
    pub fn render(&self, ctx: &RouteContext<'_>) -> TabRequest {
        TabRequest {
            title: interpolate(&self.title, ctx),
            url: interpolate(&self.url, ctx),
            exclusive: self.exclusive,
        }
    }

    fn placeholders(&self) -> impl Iterator<Item = &str> {
        PLACEHOLDER_REGEX
            .captures_iter(&self.title)
            .chain(PLACEHOLDER_REGEX.captures_iter(&self.url))
            .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
    }
}

fn interpolate(template: &str, ctx: &RouteContext<'_>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &regex::Captures<'_>| {
            ctx.param(&caps[1])
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// A route: pattern, diagnostic and optional tab target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Hash pattern, e.g. `#/test_details/:ID`
    pub pattern: String,
    /// Message logged whenever the route runs
    pub log: String,
    /// Tab to open, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabTarget>,
}

impl RouteDefinition {
    /// Route that only logs
    #[must_use]
    pub fn log_only(pattern: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            log: log.into(),
            tab: None,
        }
    }

    /// Route that opens a tab and logs
    #[must_use]
    pub fn open_tab(pattern: impl Into<String>, log: impl Into<String>, tab: TabTarget) -> Self {
        Self {
            pattern: pattern.into(),
            log: log.into(),
            tab: Some(tab),
        }
    }

    /// Checks the pattern and that every template placeholder names one of
    /// its parameters.
    ///
    /// # Errors
    ///
    /// Returns the pattern error or [`RoutingError::UnknownPlaceholder`].
    pub fn validate(&self) -> RoutingResult<RoutePattern> {
        let pattern = RoutePattern::parse(&self.pattern)?;
        if let Some(tab) = &self.tab {
            if let Some(unknown) = tab
                .placeholders()
                .find(|name| !pattern.params().iter().any(|p| p.as_str() == *name))
            {
                return Err(RoutingError::UnknownPlaceholder {
                    pattern: self.pattern.clone(),
                    placeholder: unknown.to_string(),
                });
            }
        }
        Ok(pattern)
    }

    /// Builds the handler registered with the engine
    #[must_use]
    pub fn handler(&self) -> RouteHandler {
        let log = self.log.clone();
        let tab = self.tab.clone();
        Box::new(move |ctx: &mut RouteContext<'_>| {
            let request = tab.as_ref().map(|target| target.render(&*ctx));
            ctx.log(log.as_str());
            request
        })
    }
}
