//! Hash location handling
//!
//! A location is the part of a browser URL starting at the first `#`.
//! An optional `?query` suffix is split off before route matching.

use std::fmt;

/// A parsed hash location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    raw: String,
    path_len: usize,
}

impl Location {
    /// Parses a location from a full URL, a bare fragment or an empty string.
    ///
    /// Anything before the first `#` is dropped. Input without `#` yields the
    /// empty location.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let raw = input.find('#').map_or("", |idx| &input[idx..]);
        let path_len = raw.find('?').unwrap_or(raw.len());
        Self {
            raw: raw.to_string(),
            path_len,
        }
    }

    /// The whole location including any query
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The location without its query, used for route matching
    #[must_use]
    pub fn path(&self) -> &str {
        &self.raw[..self.path_len]
    }

    /// The raw query string without the leading `?`, if any
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.raw.get(self.path_len + 1..)
    }

    /// Returns true if there is no fragment at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Decoded `key=value` pairs of the query, in order of appearance.
    ///
    /// A key without `=` maps to the empty string. Empty pairs are skipped.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let Some(query) = self.query() else {
            return Vec::new();
        };
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Percent-decodes a location component, reading `+` as a space.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[must_use]
pub fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes()))
            .into_owned(),
    }
}
