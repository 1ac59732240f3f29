//! Property-based tests for the case transforms
//!
//! Uses proptest to generate arbitrary text and identifier-like strings and
//! checks the invariants every style must hold.

use proptest::prelude::*;
use stringcase::*;

/// Identifier-ish ASCII with every separator and some symbols
fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_. !$-]{0,40}"
}

/// Any text, including multi-byte characters
fn any_text() -> impl Strategy<Value = String> {
    ".{0,40}"
}

fn any_case() -> impl Strategy<Value = Case> {
    prop::sample::select(Case::ALL.to_vec())
}

/// `needle` appears in `haystack` in order, not necessarily contiguously
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

proptest! {
    #[test]
    fn test_lowercase_idempotent(s in any_text()) {
        let once = lowercase(&s);
        prop_assert_eq!(lowercase(&once), once.clone());
        prop_assert_eq!(once.len(), s.len());
    }

    #[test]
    fn test_uppercase_idempotent(s in any_text()) {
        let once = uppercase(&s);
        prop_assert_eq!(uppercase(&once), once.clone());
        prop_assert_eq!(once.len(), s.len());
    }

    #[test]
    fn test_trimcase_idempotent(s in "[ \t\r\n\x0b\x0ca-z]{0,20}") {
        let once = trimcase(&s);
        prop_assert_eq!(trimcase(&once), once.clone());
        prop_assert!(once.len() <= s.len());
    }

    #[test]
    fn test_snakecase_idempotent(s in any_text()) {
        let once = snakecase(&s);
        prop_assert_eq!(snakecase(&once), once.clone());
        // Each input char contributes at most one extra underscore
        prop_assert!(once.len() <= s.len() * 2);
    }

    #[test]
    fn test_snakecase_has_no_ascii_upper_or_separators(s in identifier()) {
        let snake = snakecase(&s);
        prop_assert!(!snake.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(!snake.contains(['-', '.', ' ']));
    }

    #[test]
    fn test_alphanumcase_filters(s in any_text()) {
        let filtered = alphanumcase(&s);
        prop_assert!(filtered.chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(is_subsequence(&filtered, &s));
    }

    #[test]
    fn test_camelcase_output(s in any_text()) {
        let camel = camelcase(&s);
        prop_assert!(camel.chars().all(|c| c.is_ascii_alphanumeric()));
        if let Some(first) = camel.chars().next() {
            prop_assert!(!first.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_pascalcase_starts_upper(s in identifier()) {
        let pascal = pascalcase(&s);
        if let Some(first) = pascal.chars().next() {
            // Digits have no case, everything else must be uppercase
            prop_assert!(!first.is_ascii_lowercase());
        }
        prop_assert_eq!(pascal.to_ascii_lowercase(), camelcase(&s).to_ascii_lowercase());
    }

    #[test]
    fn test_sentencecase_single_spaced(s in identifier()) {
        let sentence = sentencecase(&s);
        prop_assert!(!sentence.contains("  "));
        prop_assert!(!sentence.starts_with(' '));
        prop_assert!(!sentence.ends_with(' '));
        prop_assert!(!sentence.chars().skip(1).any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_separator_styles_mirror_snakecase(s in any_text()) {
        let snake = snakecase(&s);
        prop_assert_eq!(pathcase(&s), snake.replace('_', "/"));
        prop_assert_eq!(backslashcase(&s), snake.replace('_', "\\"));
        prop_assert_eq!(spinalcase(&s), snake.replace('_', "-"));
        prop_assert_eq!(dotcase(&s), snake.replace('_', "."));
        prop_assert_eq!(constcase(&s), snake.to_ascii_uppercase());
        prop_assert_eq!(titlecase(&s).len(), snake.len());
    }

    #[test]
    fn test_capitalcase_only_touches_first(s in any_text()) {
        let capital = capitalcase(&s);
        prop_assert_eq!(capital.len(), s.len());
        let tail_in: String = s.chars().skip(1).collect();
        let tail_out: String = capital.chars().skip(1).collect();
        prop_assert_eq!(tail_out, tail_in);
    }

    #[test]
    fn test_pure_and_deterministic(case in any_case(), s in any_text()) {
        prop_assert_eq!(case.apply(&s), case.apply(&s));
        prop_assert_eq!(convert_bytes(case, s.as_bytes()).unwrap(), case.apply(&s));
    }

    #[test]
    fn test_case_name_roundtrip(case in any_case()) {
        prop_assert_eq!(case.to_string().parse::<Case>().unwrap(), case);
        let json = serde_json::to_string(&case).unwrap();
        prop_assert_eq!(serde_json::from_str::<Case>(&json).unwrap(), case);
    }
}
