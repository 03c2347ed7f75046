//! Route listing command.

use std::fmt::Write as _;
use std::path::Path;

use testdesk_core::config::RoutingSettings;
use testdesk_core::routing::RouteDefinition;

use crate::cli::RoutesFormat;
use crate::error::CliError;
use crate::util::load_settings;

/// Routes command handler
pub fn cmd_routes(config_path: Option<&Path>, format: RoutesFormat) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;

    match format {
        RoutesFormat::Table => println!("{}", format_table(&settings)),
        RoutesFormat::Json => {
            let json = serde_json::to_string_pretty(&settings.routes)
                .map_err(|e| CliError::Output(format!("Failed to serialize routes: {e}")))?;
            println!("{json}");
        }
        RoutesFormat::Toml => {
            let text = toml::to_string_pretty(&settings)
                .map_err(|e| CliError::Output(format!("Failed to serialize routes: {e}")))?;
            print!("{text}");
        }
    }

    Ok(())
}

fn tab_columns(route: &RouteDefinition) -> (&str, &str, &str) {
    match &route.tab {
        Some(tab) => (
            tab.title.as_str(),
            tab.url.as_str(),
            if tab.exclusive { "yes" } else { "no" },
        ),
        None => ("-", "-", "-"),
    }
}

/// Format the route table as aligned columns
#[must_use]
pub fn format_table(settings: &RoutingSettings) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Mount point: {}", settings.mount_point);
    if !settings.start_location.is_empty() {
        let _ = writeln!(output, "Start:       {}", settings.start_location);
    }
    let _ = writeln!(output);

    let pattern_width = settings
        .routes
        .iter()
        .map(|r| r.pattern.len())
        .max()
        .unwrap_or(7)
        .max(7);
    let title_width = settings
        .routes
        .iter()
        .map(|r| tab_columns(r).0.len())
        .max()
        .unwrap_or(5)
        .max(5);
    let url_width = settings
        .routes
        .iter()
        .map(|r| tab_columns(r).1.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let _ = writeln!(
        output,
        "{:<pattern_width$}  {:<title_width$}  {:<url_width$}  {:<9}  LOG",
        "PATTERN", "TITLE", "URL", "EXCLUSIVE"
    );
    for route in &settings.routes {
        let (title, url, exclusive) = tab_columns(route);
        let _ = writeln!(
            output,
            "{:<pattern_width$}  {:<title_width$}  {:<url_width$}  {:<9}  {}",
            route.pattern, title, url, exclusive, route.log
        );
    }

    output.trim_end().to_string()
}
