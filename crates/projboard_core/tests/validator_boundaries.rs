use projboard_core::{validate, Validatable};
use proptest::prelude::*;

#[test]
fn min_length_boundary_is_exclusive() {
    assert!(!validate(&Validatable::new("abcde").min_length(5)));
    assert!(validate(&Validatable::new("abcdef").min_length(5)));
}

#[test]
fn max_length_boundary_is_exclusive() {
    assert!(!validate(&Validatable::new("abcde").max_length(5)));
    assert!(validate(&Validatable::new("abcd").max_length(5)));
}

#[test]
fn numeric_boundaries_are_exclusive() {
    assert!(!validate(&Validatable::new(6.0).min(1.0).max(6.0)));
    assert!(validate(&Validatable::new(5.0).min(1.0).max(6.0)));
}

#[test]
fn nan_fails_numeric_bounds() {
    assert!(!validate(&Validatable::new(f64::NAN).min(1.0).max(6.0)));
    assert!(!validate(&Validatable::new(f64::NAN).min(1.0)));
    assert!(!validate(&Validatable::new(f64::NAN).max(6.0)));
    // Without bounds there is nothing to violate.
    assert!(validate(&Validatable::new(f64::NAN)));
}

#[test]
fn required_rejects_whitespace_only() {
    assert!(!validate(&Validatable::new("   ").required()));
    assert!(!validate(&Validatable::new("").required()));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(validate(&Validatable::new("ééééé").max_length(6)));
}

proptest! {
    #[test]
    fn text_length_matches_strict_window(text in "[a-z]{0,20}", min in 0usize..10, span in 1usize..10) {
        let max = min + span;
        let len = text.chars().count();
        let expected = len > min && len < max;
        prop_assert_eq!(
            validate(&Validatable::new(text.as_str()).min_length(min).max_length(max)),
            expected
        );
    }

    #[test]
    fn numbers_match_strict_window(value in -100i32..100, min in -50i32..50, span in 1i32..50) {
        let max = min + span;
        let expected = value > min && value < max;
        prop_assert_eq!(
            validate(&Validatable::new(f64::from(value)).min(f64::from(min)).max(f64::from(max))),
            expected
        );
    }

    #[test]
    fn numeric_constraints_never_reject_text(text in "[0-9]{1,3}") {
        prop_assert!(validate(&Validatable::new(text.as_str()).min(1000.0).max(1001.0)));
    }
}
