//! Property tests for the application route table

use proptest::prelude::*;
use testdesk_core::config::RoutingSettings;
use testdesk_core::routing::{HashRouter, application_routes, configure_routes, run_routes};
use testdesk_core::tab::{TabRecorder, TabRequest};

/// Locations exercising every built-in route plus a miss
const PROBES: [&str; 8] = [
    "#main",
    "#/test_details/42",
    "#/schedule_new_test",
    "#/search_test",
    "#/report/test_status",
    "#/help",
    "#/unknown",
    "#/test_details",
];

/// Runs `location` through a freshly configured router
fn open(settings: RoutingSettings, location: &str) -> Vec<TabRequest> {
    let mut router = HashRouter::new(TabRecorder::new());
    let table = configure_routes(&mut router, settings).unwrap();
    run_routes(&table, &mut router, location).unwrap();
    router.into_tabs().take()
}

/// Known patterns, used to filter generated misses
fn is_known(location: &str) -> bool {
    matches!(
        location,
        "#main" | "#/schedule_new_test" | "#/search_test" | "#/report/test_status" | "#/help"
    )
}

proptest! {
    /// Any test id opens the details tab with that id verbatim.
    #[test]
    fn test_details_uses_id_verbatim(id in "[A-Za-z0-9_.~-]{1,20}") {
        let tabs = open(RoutingSettings::default(), &format!("#/test_details/{id}"));
        prop_assert_eq!(
            tabs,
            vec![TabRequest::new(format!("TEST ID : {id}"), format!("/test_details/{id}"))]
        );
    }

    /// Encoded ids are decoded before interpolation and never validated.
    #[test]
    fn test_details_decodes_id(id in "\\PC{1,16}") {
        let encoded = urlencoding::encode(&id);
        let tabs = open(RoutingSettings::default(), &format!("#/test_details/{encoded}"));
        prop_assert_eq!(tabs.len(), 1);
        prop_assert_eq!(&tabs[0].title, &format!("TEST ID : {id}"));
        prop_assert_eq!(&tabs[0].url, &format!("/test_details/{id}"));
    }

    /// Unknown locations open nothing.
    #[test]
    fn unknown_location_opens_nothing(path in "#/[a-z_]{1,16}") {
        prop_assume!(!is_known(&path));
        prop_assert!(open(RoutingSettings::default(), &path).is_empty());
    }

    /// Registration order does not change what any probe opens.
    #[test]
    fn registration_order_is_irrelevant(
        routes in Just(application_routes()).prop_shuffle()
    ) {
        let shuffled = RoutingSettings::default().with_routes(routes);
        for probe in PROBES {
            prop_assert_eq!(
                open(shuffled.clone(), probe),
                open(RoutingSettings::default(), probe),
                "probe {}", probe
            );
        }
    }
}
