//! Tab manager seam
//!
//! The routing layer never creates tabs itself. Matched routes produce a
//! [`TabRequest`] that is handed to whatever [`TabManager`] the router was
//! built with.

use serde::{Deserialize, Serialize};

/// A request to open a tab showing a server-rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabRequest {
    /// Tab caption
    pub title: String,
    /// Page loaded into the tab
    pub url: String,
    /// Whether the tab manager should treat this tab as exclusive
    #[serde(default)]
    pub exclusive: bool,
}

impl TabRequest {
    /// Creates a non-exclusive tab request
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            exclusive: false,
        }
    }

    /// Sets the exclusive flag
    #[must_use]
    pub const fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }
}

/// External component that opens or focuses tabs.
pub trait TabManager {
    /// Opens a tab for the request. No result is reported back.
    fn add_tab(&mut self, request: &TabRequest);
}

impl<T: TabManager + ?Sized> TabManager for &mut T {
    fn add_tab(&mut self, request: &TabRequest) {
        (**self).add_tab(request);
    }
}

impl<T: TabManager + ?Sized> TabManager for Box<T> {
    fn add_tab(&mut self, request: &TabRequest) {
        (**self).add_tab(request);
    }
}

/// Tab manager that only remembers what it was asked to open.
///
/// Used by the CLI to report dispatch results and by tests.
#[derive(Debug, Default, Clone)]
pub struct TabRecorder {
    requests: Vec<TabRequest>,
}

impl TabRecorder {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> &[TabRequest] {
        &self.requests
    }

    /// Number of requests received
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if nothing was requested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Removes and returns all recorded requests
    pub fn take(&mut self) -> Vec<TabRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl TabManager for TabRecorder {
    fn add_tab(&mut self, request: &TabRequest) {
        tracing::debug!(
            title = %request.title,
            url = %request.url,
            exclusive = request.exclusive,
            "Tab requested"
        );
        self.requests.push(request.clone());
    }
}
