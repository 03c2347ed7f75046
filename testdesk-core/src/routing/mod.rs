//! Hash routing for the test desk UI
//!
//! Browser location changes are matched against registered patterns and the
//! matching route asks the tab manager to open a page.
//!
//! - [`pattern`] - `#/path/:param` compiler
//! - [`location`] - fragment and query parsing
//! - [`engine`] - [`RouteEngine`] seam and the [`HashRouter`] implementation
//! - [`definition`] - declarative routes and tab templates
//! - [`table`] - the application route table

mod context;
pub mod definition;
pub mod engine;
pub mod location;
pub mod pattern;
pub mod table;

pub use context::{RouteContext, RouteParams};
pub use definition::{RouteDefinition, TabTarget};
pub use engine::{
    DispatchOutcome, HashRouter, NavigationRecord, OutcomeKind, RouteEngine, RouteHandler,
    RouteMatch,
};
pub use location::{Location, decode_component};
pub use pattern::RoutePattern;
pub use table::{
    DEFAULT_MOUNT_POINT, DEFAULT_START_LOCATION, RouteTable, application_routes,
    configure_routes, run_routes,
};
