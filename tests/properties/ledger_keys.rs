//! Property tests for hash ledger keys.

use std::path::PathBuf;

use proptest::prelude::*;

use modpack::domain::entities::HashLedger;
use modpack::domain::value_objects::ContentHash;

fn relative_segments() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap();
    proptest::collection::vec(segment, 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys always use `/` separators and look up the path they came from.
    #[test]
    fn property_ledger_keys_use_forward_slashes(segments in relative_segments()) {
        let path: PathBuf = segments.iter().collect();
        let mut ledger = HashLedger::new();
        ledger.insert(&path, ContentHash::from_bytes(b"x"));

        let key = ledger.keys().next().unwrap().to_string();
        prop_assert_eq!(&key, &segments.join("/"));
        prop_assert!(!key.contains('\\'));
        prop_assert!(ledger.contains(&path));
    }

    /// PROPERTY: Hashing the same bytes twice always matches; different bytes never do.
    #[test]
    fn property_content_hash_matches_only_equal_content(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let ha = ContentHash::from_bytes(&a);
        prop_assert!(ha.matches(&ContentHash::from_bytes(&a)));
        prop_assert_eq!(ha.matches(&ContentHash::from_bytes(&b)), a == b);
    }
}
