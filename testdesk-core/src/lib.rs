//! Test desk core library
//!
//! Hash-route bindings for the test desk web UI. When the browser location
//! changes (for example to `#/help`), the matching route asks an injected tab
//! manager to open the corresponding server-rendered page.
//!
//! # Crate Structure
//!
//! - [`routing`] - Patterns, the hash router engine and the application route table
//! - [`tab`] - Tab manager seam and a recording implementation
//! - [`config`] - Route table settings and TOML persistence
//! - [`tracing`] - Subscriber setup and span names
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use testdesk_core::config::RoutingSettings;
//! use testdesk_core::routing::{HashRouter, configure_routes, run_routes};
//! use testdesk_core::tab::TabRecorder;
//!
//! let mut router = HashRouter::new(TabRecorder::new());
//! let table = configure_routes(&mut router, RoutingSettings::default()).unwrap();
//! run_routes(&table, &mut router, "/index.html#/help").unwrap();
//!
//! let opened = &router.tabs().requests()[0];
//! assert_eq!(opened.title, "Help Page");
//! assert!(opened.exclusive);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod routing;
pub mod tab;
pub mod tracing;

pub use config::{ConfigManager, RoutingSettings};
pub use error::{
    ConfigError, ConfigResult, PatternError, RoutingError, RoutingResult, TestDeskError,
};
pub use routing::{
    DispatchOutcome, HashRouter, Location, RouteContext, RouteDefinition, RouteEngine,
    RoutePattern, RouteTable, TabTarget, application_routes, configure_routes, run_routes,
};
pub use tab::{TabManager, TabRecorder, TabRequest};
