//! Property tests for route pattern compilation and matching

use proptest::prelude::*;
use testdesk_core::routing::RoutePattern;

/// Generates a literal path segment
fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

proptest! {
    /// A literal pattern matches itself and nothing longer.
    #[test]
    fn literal_pattern_matches_only_itself(
        segments in prop::collection::vec(arb_segment(), 1..4),
        suffix in "[a-z/]{1,4}",
    ) {
        let path = format!("#/{}", segments.join("/"));
        let pattern = RoutePattern::parse(&path).unwrap();

        prop_assert!(pattern.is_literal());
        prop_assert!(pattern.is_match(&path));
        let longer = format!("{path}{suffix}");
        prop_assert!(!pattern.is_match(&longer));
    }

    /// A parameter captures exactly the segment it stands for.
    #[test]
    fn parameter_captures_segment(
        prefix in arb_segment(),
        value in "[A-Za-z0-9%._~-]{1,16}",
    ) {
        let pattern = RoutePattern::parse(&format!("#/{prefix}/:value")).unwrap();
        let location = format!("#/{prefix}/{value}");
        let captures = pattern.captures(&location);
        prop_assert_eq!(captures, Some(vec![("value", value.as_str())]));
    }

    /// Parameters never span a slash.
    #[test]
    fn parameter_does_not_cross_slash(
        prefix in arb_segment(),
        a in "[a-z0-9]{1,6}",
        b in "[a-z0-9]{1,6}",
    ) {
        let pattern = RoutePattern::parse(&format!("#/{prefix}/:id")).unwrap();
        let location = format!("#/{prefix}/{a}/{b}");
        prop_assert!(!pattern.is_match(&location));
    }

    /// Patterns without a leading hash are always rejected.
    #[test]
    fn pattern_without_hash_rejected(path in "/[a-z/]{0,20}") {
        prop_assert!(RoutePattern::parse(&path).is_err());
    }

    /// Regex metacharacters in literal text are matched literally.
    #[test]
    fn metacharacters_are_literal(segment in "[a-z]{1,5}[.+*()\\[\\]$^|]{1,3}") {
        let path = format!("#/{segment}");
        let pattern = RoutePattern::parse(&path).unwrap();
        prop_assert!(pattern.is_match(&path));
    }
}
