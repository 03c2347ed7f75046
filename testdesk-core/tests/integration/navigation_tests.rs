//! End-to-end navigation through the application routes

use testdesk_core::config::RoutingSettings;
use testdesk_core::routing::{
    DispatchOutcome, HashRouter, OutcomeKind, RouteTable, configure_routes, run_routes,
};
use testdesk_core::tab::{TabRecorder, TabRequest};
use testdesk_core::RoutingError;

fn started() -> HashRouter<TabRecorder> {
    let mut router = HashRouter::new(TabRecorder::new());
    let table = configure_routes(&mut router, RoutingSettings::default()).unwrap();
    run_routes(&table, &mut router, "http://desk.local/").unwrap();
    router
}

fn navigate(router: &mut HashRouter<TabRecorder>, location: &str) -> DispatchOutcome {
    router.handle_location_change(location).unwrap()
}

#[test]
fn literal_routes_open_exactly_one_tab() {
    let cases = [
        ("#/schedule_new_test", "Scheduling New Test", "/schedule_new_test", false),
        ("#/search_test", "Test Search", "/search_test", false),
        ("#/report/test_status", "Report - All Tests", "/report/test_status", false),
        ("#/help", "Help Page", "/help", true),
    ];

    for (location, title, url, exclusive) in cases {
        let mut router = started();
        navigate(&mut router, location);
        assert_eq!(
            router.tabs().requests(),
            [TabRequest::new(title, url).with_exclusive(exclusive)],
            "location {location}"
        );
    }
}

#[test]
fn test_details_opens_tab_for_id() {
    let mut router = started();
    let outcome = navigate(&mut router, "#/test_details/42");

    let tab = outcome.tab().unwrap();
    assert_eq!(tab.title, "TEST ID : 42");
    assert_eq!(tab.url, "/test_details/42");
    assert!(!tab.exclusive);
}

#[test]
fn test_details_id_is_not_validated() {
    let mut router = started();
    let outcome = navigate(&mut router, "#/test_details/not-a-number");
    assert_eq!(outcome.tab().unwrap().url, "/test_details/not-a-number");
}

#[test]
fn diagnostics_match_each_route() {
    let cases = [
        ("#/test_details/7", "NEW"),
        ("#/schedule_new_test", "#/schedule_new_test"),
        ("#/search_test", "#/search_test"),
        ("#/report/test_status", "#/report/all_test"),
        ("#/help", "#/help"),
    ];
    let mut router = started();
    for (location, message) in cases {
        let DispatchOutcome::Matched(m) = navigate(&mut router, location) else {
            panic!("{location} should match");
        };
        assert_eq!(m.messages, vec![message.to_string()]);
    }
}

#[test]
fn main_route_only_logs() {
    let mut router = HashRouter::new(TabRecorder::new());
    let table = configure_routes(&mut router, RoutingSettings::default()).unwrap();
    let outcome = run_routes(&table, &mut router, "#main").unwrap();

    let DispatchOutcome::Matched(m) = outcome else {
        panic!("#main should match");
    };
    assert_eq!(m.messages, vec!["MAIN".to_string()]);
    assert_eq!(m.tab, None);
    assert!(router.tabs().is_empty());
}

#[test]
fn unmatched_locations_fall_through() {
    let mut router = started();
    for location in ["#/nope", "#/help/extra", "#/test_details/", "#/HELP", "#"] {
        let outcome = navigate(&mut router, location);
        assert_eq!(outcome.kind(), OutcomeKind::NotFound, "location {location}");
    }
    assert!(router.tabs().is_empty());
}

#[test]
fn only_help_is_exclusive() {
    let mut router = started();
    for location in [
        "#/test_details/1",
        "#/schedule_new_test",
        "#/search_test",
        "#/report/test_status",
        "#/help",
    ] {
        navigate(&mut router, location);
    }
    let exclusive: Vec<&str> = router
        .tabs()
        .requests()
        .iter()
        .filter(|t| t.exclusive)
        .map(|t| t.url.as_str())
        .collect();
    assert_eq!(exclusive, vec!["/help"]);
}

#[test]
fn revisiting_after_leaving_opens_again() {
    let mut router = started();
    navigate(&mut router, "#/help");
    navigate(&mut router, "#/help");
    navigate(&mut router, "#/search_test");
    navigate(&mut router, "#/help");

    let titles: Vec<&str> = router
        .tabs()
        .requests()
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Help Page", "Test Search", "Help Page"]);
}

#[test]
fn query_parameters_reach_the_context() {
    let mut router = started();
    let DispatchOutcome::Matched(m) = navigate(&mut router, "#/search_test?owner=qa+team") else {
        panic!("query should not prevent matching");
    };
    assert_eq!(m.params.get("owner").map(String::as_str), Some("qa team"));
    assert_eq!(m.tab.unwrap().url, "/search_test");
}

#[test]
fn second_configure_is_rejected() {
    let mut router = HashRouter::new(TabRecorder::new());
    let mut table = RouteTable::default();
    table.configure(&mut router).unwrap();

    assert_eq!(
        table.configure(&mut router),
        Err(RoutingError::AlreadyConfigured)
    );
    assert_eq!(router.route_count(), 6);
}

#[test]
fn custom_mount_point_and_no_start_location() {
    let settings = RoutingSettings::default()
        .with_mount_point("#desk")
        .with_start_location("");
    let mut router = HashRouter::new(TabRecorder::new());
    let table = configure_routes(&mut router, settings).unwrap();
    let outcome = run_routes(&table, &mut router, "").unwrap();

    assert_eq!(router.mount_point(), Some("#desk"));
    assert_eq!(outcome, DispatchOutcome::NotFound { location: String::new() });
}
