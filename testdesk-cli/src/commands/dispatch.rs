//! Location dispatch command.
//!
//! Builds the hash router with a recording tab manager, runs it on the first
//! location and feeds the remaining ones as location changes.

use std::fmt::Write as _;
use std::path::Path;

use testdesk_core::config::RoutingSettings;
use testdesk_core::routing::{DispatchOutcome, HashRouter, OutcomeKind, configure_routes};
use testdesk_core::tab::TabRecorder;

use crate::cli::DispatchFormat;
use crate::error::CliError;
use crate::util::load_settings;

/// Parameters for the dispatch command
pub struct DispatchParams<'a> {
    /// Locations in visiting order
    pub locations: &'a [String],
    /// Start location override
    pub start: Option<&'a str>,
    /// Fail when a location matches nothing
    pub strict: bool,
    /// Output format
    pub format: DispatchFormat,
}

/// Dispatch command handler
pub fn cmd_dispatch(
    config_path: Option<&Path>,
    params: &DispatchParams<'_>,
) -> Result<(), CliError> {
    let mut settings = load_settings(config_path)?;
    if let Some(start) = params.start {
        settings.start_location = start.to_string();
    }

    let outcomes = run_locations(settings, params.locations)?;

    match params.format {
        DispatchFormat::Table => println!("{}", format_table(&outcomes)),
        DispatchFormat::Json => {
            let json = serde_json::to_string_pretty(&outcomes)
                .map_err(|e| CliError::Output(format!("Failed to serialize outcomes: {e}")))?;
            println!("{json}");
        }
    }

    if params.strict {
        if let Some(miss) = outcomes
            .iter()
            .find(|o| o.kind() == OutcomeKind::NotFound)
        {
            return Err(CliError::NoMatch(miss.location().to_string()));
        }
    }

    Ok(())
}

/// Runs the locations through a freshly configured router
pub fn run_locations(
    settings: RoutingSettings,
    locations: &[String],
) -> Result<Vec<DispatchOutcome>, CliError> {
    let mut router = HashRouter::new(TabRecorder::new());
    let table = configure_routes(&mut router, settings)?;

    let mut outcomes = Vec::with_capacity(locations.len());
    let mut iter = locations.iter();
    let first = iter.next().map_or("", String::as_str);
    outcomes.push(table.run(&mut router, first)?);
    for location in iter {
        outcomes.push(router.handle_location_change(location)?);
    }

    tracing::debug!(
        dispatched = outcomes.len(),
        tabs = router.tabs().len(),
        "Dispatch finished"
    );
    Ok(outcomes)
}

/// Format outcomes as aligned columns
#[must_use]
pub fn format_table(outcomes: &[DispatchOutcome]) -> String {
    let location_width = outcomes
        .iter()
        .map(|o| o.location().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<location_width$}  {:<9}  TAB",
        "LOCATION", "OUTCOME"
    );
    for outcome in outcomes {
        let tab = match outcome.tab() {
            Some(tab) if tab.exclusive => format!("{} -> {} (exclusive)", tab.title, tab.url),
            Some(tab) => format!("{} -> {}", tab.title, tab.url),
            None => "-".to_string(),
        };
        let _ = writeln!(
            output,
            "{:<location_width$}  {:<9}  {}",
            outcome.location(),
            outcome.kind().to_string(),
            tab
        );
    }
    output.trim_end().to_string()
}
