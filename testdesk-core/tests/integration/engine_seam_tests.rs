//! The route table against an engine other than `HashRouter`

use testdesk_core::RoutingError;
use testdesk_core::routing::{
    DispatchOutcome, Location, RouteContext, RouteEngine, RouteHandler, RoutePattern,
    RouteTable,
};
use testdesk_core::tab::TabRequest;

/// Engine that keeps handlers and lets the test invoke them directly
#[derive(Default)]
struct ManualEngine {
    routes: Vec<(RoutePattern, RouteHandler)>,
    activations: Vec<(String, Option<String>, String)>,
}

impl ManualEngine {
    fn invoke(&self, pattern: &str, params: &[(&str, &str)]) -> Option<TabRequest> {
        let (pattern, handler) = self
            .routes
            .iter()
            .find(|(p, _)| p.as_str() == pattern)
            .expect("pattern registered");
        let location = Location::parse(pattern.as_str());
        let params = params
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut ctx = RouteContext::new("#main", pattern, &location, params);
        handler(&mut ctx)
    }
}

impl RouteEngine for ManualEngine {
    fn register_route(&mut self, pattern: &str, handler: RouteHandler) -> Result<(), RoutingError> {
        self.routes.push((RoutePattern::parse(pattern)?, handler));
        Ok(())
    }

    fn activate(
        &mut self,
        mount_point: &str,
        start: Option<&str>,
        current: &str,
    ) -> Result<DispatchOutcome, RoutingError> {
        self.activations.push((
            mount_point.to_string(),
            start.map(str::to_string),
            current.to_string(),
        ));
        Ok(DispatchOutcome::NotFound {
            location: current.to_string(),
        })
    }

    fn patterns(&self) -> Vec<&RoutePattern> {
        self.routes.iter().map(|(p, _)| p).collect()
    }
}

#[test]
fn table_registers_the_six_patterns_in_order() {
    let mut engine = ManualEngine::default();
    RouteTable::default().configure(&mut engine).unwrap();

    let patterns: Vec<&str> = engine.patterns().iter().map(|p| p.as_str()).collect();
    assert_eq!(
        patterns,
        vec![
            "#main",
            "#/test_details/:ID",
            "#/schedule_new_test",
            "#/search_test",
            "#/report/test_status",
            "#/help",
        ]
    );
}

#[test]
fn handlers_work_without_the_hash_router() {
    let mut engine = ManualEngine::default();
    RouteTable::default().configure(&mut engine).unwrap();

    assert_eq!(engine.invoke("#main", &[]), None);
    assert_eq!(
        engine.invoke("#/test_details/:ID", &[("ID", "99")]),
        Some(TabRequest::new("TEST ID : 99", "/test_details/99"))
    );
    assert_eq!(
        engine.invoke("#/help", &[]),
        Some(TabRequest::new("Help Page", "/help").with_exclusive(true))
    );
}

#[test]
fn run_passes_mount_and_start_to_engine() {
    let mut engine = ManualEngine::default();
    let mut table = RouteTable::default();
    table.configure(&mut engine).unwrap();
    table.run(&mut engine, "#/help").unwrap();

    assert_eq!(
        engine.activations,
        vec![(
            "#main".to_string(),
            Some("#main".to_string()),
            "#/help".to_string()
        )]
    );
}

#[test]
fn table_works_through_a_trait_object() {
    let mut engine = ManualEngine::default();
    let dyn_engine: &mut dyn RouteEngine = &mut engine;
    RouteTable::default().configure(dyn_engine).unwrap();
    assert_eq!(engine.routes.len(), 6);
}
