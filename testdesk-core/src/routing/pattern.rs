//! Route pattern compiler
//!
//! Patterns are hash locations such as `#/help` or `#/test_details/:ID`.
//! A `:name` segment captures one non-empty run of characters up to the next
//! `/`. Everything else must match literally, including a `:` that is not
//! followed by a name.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PatternError;

/// Matches `:name` parameter markers
static PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z0-9_]+)").expect("PARAM_REGEX is a valid regex pattern")
});

/// Expression substituted for each parameter marker
const PARAM_CAPTURE: &str = "([^/]+)";

/// A compiled hash-route pattern
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    params: Vec<String>,
    regex: Regex,
}

impl RoutePattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty, does not start with `#`
    /// or repeats a parameter name.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        if !pattern.starts_with('#') {
            return Err(PatternError::MissingHash(pattern.to_string()));
        }

        let mut expr = String::from("^");
        let mut params: Vec<String> = Vec::new();
        let mut last = 0;

        for cap in PARAM_REGEX.captures_iter(pattern) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            let name = name.as_str();
            if params.iter().any(|p| p == name) {
                return Err(PatternError::DuplicateParameter {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            expr.push_str(&regex::escape(&pattern[last..whole.start()]));
            expr.push_str(PARAM_CAPTURE);
            params.push(name.to_string());
            last = whole.end();
        }
        expr.push_str(&regex::escape(&pattern[last..]));
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|e| PatternError::Compile {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            params,
            regex,
        })
    }

    /// The pattern as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parameter names in declaration order
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns true if the pattern has no parameters
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.params.is_empty()
    }

    /// Matches a query-free location against the pattern.
    ///
    /// Returns the raw (still percent-encoded) captures paired with their
    /// parameter names, or `None` when the location does not match.
    #[must_use]
    pub fn captures<'a>(&'a self, path: &'a str) -> Option<Vec<(&'a str, &'a str)>> {
        let caps = self.regex.captures(path)?;
        Some(
            self.params
                .iter()
                .enumerate()
                .filter_map(|(i, name)| caps.get(i + 1).map(|m| (name.as_str(), m.as_str())))
                .collect(),
        )
    }

    /// Returns true if the location matches
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
