//! Property tests for location parsing

use proptest::prelude::*;
use testdesk_core::routing::{Location, decode_component};

proptest! {
    /// Whatever precedes the first `#` never influences the location.
    #[test]
    fn prefix_is_ignored(
        prefix in "[a-z:/.]{0,30}",
        fragment in "[a-z/_]{0,20}",
    ) {
        let bare = Location::parse(&format!("#{fragment}"));
        let full = Location::parse(&format!("{prefix}#{fragment}"));
        prop_assert_eq!(bare, full);
    }

    /// Input without a hash always yields the empty location.
    #[test]
    fn no_hash_means_empty(input in "[^#]{0,40}") {
        prop_assert!(Location::parse(&input).is_empty());
    }

    /// The path never contains the query separator.
    #[test]
    fn path_excludes_query(
        path in "[a-z/_]{1,20}",
        query in "[a-z=&]{0,20}",
    ) {
        let location = Location::parse(&format!("#{path}?{query}"));
        prop_assert_eq!(location.path(), format!("#{path}"));
        prop_assert_eq!(location.query(), Some(query.as_str()));
    }

    /// Decoding reverses percent-encoding for any text.
    #[test]
    fn decode_reverses_encode(text in "\\PC{0,24}") {
        let encoded = urlencoding::encode(&text);
        prop_assert_eq!(decode_component(&encoded), text);
    }
}
