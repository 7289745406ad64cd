//! Property-based tests for path handling.
//!
//! Note: The join module already has property tests for concatenation.
//! This module focuses on how the operations relate to each other.

use super::{basename, dirname, extname, format, join, parse};
use proptest::prelude::*;

// Strategy for a single separator-free component
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4})?"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    relative_path_strategy().prop_map(|p| format!("/{p}"))
}

// Arbitrary strings over the characters that matter to the engine
fn noisy_path_strategy() -> impl Strategy<Value = String> {
    "[a./]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // basename(join(a, b)) == b for a separator-free b
    #[test]
    fn basename_of_join_is_last_segment(a in relative_path_strategy(), b in component_strategy()) {
        prop_assert_eq!(basename(&join([a.as_str(), b.as_str()]), None), b);
    }

    // dirname(join(a, b)) == a for plain segments
    #[test]
    fn dirname_of_join_is_prefix(a in absolute_path_strategy(), b in component_strategy()) {
        prop_assert_eq!(dirname(&join([a.as_str(), b.as_str()])), a);
    }

    // join is associative over plain segments
    #[test]
    fn join_idempotent_nesting(
        a in relative_path_strategy(),
        b in relative_path_strategy(),
        c in relative_path_strategy(),
    ) {
        let nested = join([join([a.as_str(), b.as_str()]).as_str(), c.as_str()]);
        prop_assert_eq!(nested, join([a.as_str(), b.as_str(), c.as_str()]));
    }

    // parse agrees with the splitting functions
    #[test]
    fn parse_consistent_with_split(path in absolute_path_strategy()) {
        let record = parse(&path);
        prop_assert_eq!(&record.base, &basename(&path, None));
        prop_assert_eq!(&record.dir, &dirname(&path));
        if !record.base.starts_with('.') {
            prop_assert_eq!(&record.ext, &extname(&record.base));
        }
        prop_assert_eq!(record.root.as_str(), "/");
    }

    // format inverts parse for canonical paths
    #[test]
    fn format_inverts_parse(path in prop_oneof![relative_path_strategy(), absolute_path_strategy()]) {
        prop_assert_eq!(format(&parse(&path)), path);
    }

    // base is always name followed by ext
    #[test]
    fn parse_base_is_name_plus_ext(path in noisy_path_strategy()) {
        let record = parse(&path);
        prop_assert_eq!(record.base, format!("{}{}", record.name, record.ext));
    }

    // root is always a prefix of dir
    #[test]
    fn parse_root_prefixes_dir(path in noisy_path_strategy()) {
        let record = parse(&path);
        prop_assert!(record.dir.starts_with(&record.root));
    }

    // No operation panics or returns an empty directory
    #[test]
    fn operations_are_total(path in noisy_path_strategy(), suffix in "[a.]{0,3}") {
        let _ = basename(&path, Some(suffix.as_str()));
        let _ = extname(&path);
        prop_assert!(!dirname(&path).is_empty());
        prop_assert!(!join([path.as_str(), suffix.as_str()]).is_empty());
    }
}
