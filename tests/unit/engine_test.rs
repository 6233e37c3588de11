//! Tests for the matching / expansion / loop-detection engine.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use tabhop::engine::{expand, normalize, resolve, would_loop_for, would_loop_static};
use tabhop::error::TabhopError;
use tabhop::Shortcut;

mod resolve_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_expansion_leaves_no_live_placeholders() {
        let shortcut = Shortcut::new(
            "board",
            r"^https://git\.example/([^/]+)/([^/]+)$",
            "https://board.example/$1/$2?ref=$1",
        );
        let destination = resolve(&shortcut, "https://git.example/team/repo").unwrap();
        assert_eq!(destination, "https://board.example/team/repo?ref=team");
        assert!(!destination.contains("$1"));
        assert!(!destination.contains("$2"));
    }

    #[test]
    fn test_resolution_and_normalization_compose() {
        let shortcut = Shortcut::new("strip", r"^https://www\.([^/]+)/(.*)$", "$1/$2");
        let destination = resolve(&shortcut, "https://www.example.com/a/b").unwrap();
        assert_eq!(destination, "example.com/a/b");
        assert_eq!(normalize(&destination), "https://example.com/a/b");
    }

    #[test]
    fn test_error_taxonomy_is_user_facing() {
        let bad_pattern = Shortcut::new("bad", "([", "t");
        let err = resolve(&bad_pattern, "https://example.com").unwrap_err();
        assert!(err.is_user_facing());

        let no_match = Shortcut::new("nm", "^https://other\\.dev", "t");
        let err = resolve(&no_match, "https://example.com").unwrap_err();
        assert!(matches!(err, TabhopError::NoMatch { .. }));
        assert!(err.is_user_facing());
    }
}

mod expand_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn caps(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_spotcheck_two_groups() {
        assert_eq!(expand("a$1b$2c", &caps(&["full", "X", "Y"])), "aXbYc");
    }

    #[test]
    fn test_spotcheck_repeated_group() {
        assert_eq!(expand("$1-$1", &caps(&["full", "Z"])), "Z-Z");
    }

    proptest! {
        // A template without '$' is never altered by expansion
        #[test]
        fn prop_dollar_free_template_is_fixed_point(
            template in "[a-zA-Z0-9/:.%-]{0,40}",
            values in proptest::collection::vec("[a-z0-9]{0,8}", 1..5),
        ) {
            prop_assert_eq!(expand(&template, &values), template);
        }

        // Expansion with '$'-free capture values removes every live placeholder
        #[test]
        fn prop_live_placeholders_are_consumed(
            prefix in "[a-z]{0,6}",
            suffix in "[a-z]{0,6}",
            value in "[a-z0-9]{1,8}",
        ) {
            let template = format!("{prefix}$1{suffix}");
            let captures = vec!["whole".to_string(), value.clone()];
            prop_assert_eq!(expand(&template, &captures), format!("{prefix}{value}{suffix}"));
        }
    }
}

mod guard_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spotcheck_identical_literal_target() {
        assert!(would_loop_static(&Shortcut::new("s", "^/foo$", "/foo")));
    }

    #[test]
    fn test_spotcheck_distinct_base_paths() {
        assert!(!would_loop_static(&Shortcut::new("s", "^/old/(.*)$", "/new/$1")));
    }

    #[test]
    fn test_spotcheck_dynamic_self_rewrite() {
        let shortcut = Shortcut::new("s", "^http://a/(.*)$", "http://a/$1");
        assert!(would_loop_for(&shortcut, "http://a/x"));
    }

    #[test]
    fn test_static_check_is_heuristic_not_proof() {
        // The probe literal hides a loop that a real URL exposes: the guard
        // stays best-effort at authoring time, exact at execution time.
        let shortcut = Shortcut::new("sneaky", "(x+)$", "https://b.dev/$1");
        assert!(!would_loop_static(&shortcut));
        assert!(would_loop_for(&shortcut, "https://a.dev/xxx"));
    }
}

mod normalize_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_order_first_match_wins() {
        // localhost with a scheme hits rule 1 before the localhost rule
        assert_eq!(normalize("https://localhost:3000"), "https://localhost:3000");
        assert_eq!(normalize("localhost:3000"), "http://localhost:3000");
    }

    proptest! {
        // Normalization always yields a scheme (or passes empty through)
        #[test]
        fn prop_output_has_scheme(input in "[a-z0-9./:-]{1,30}") {
            let out = normalize(&input);
            prop_assert!(out.contains(':') || out.is_empty() || input.trim().is_empty());
        }

        // Normalization is idempotent
        #[test]
        fn prop_idempotent(input in "[a-z0-9./:-]{0,30}") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once.clone());
        }
    }
}
