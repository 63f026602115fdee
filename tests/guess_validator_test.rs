//! Tests for the guess validator.

use bulls_cows::{GUESS_LEN, Guess, is_valid_guess};
use std::collections::HashSet;

fn reference(s: &str) -> bool {
    s.chars().count() == GUESS_LEN
        && s.chars().all(|c| c.is_ascii_digit())
        && s.chars().collect::<HashSet<_>>().len() == GUESS_LEN
}

#[test]
fn test_examples() {
    assert!(is_valid_guess("1234"));
    assert!(!is_valid_guess("1123"));
    assert!(!is_valid_guess("12a4"));
    assert!(!is_valid_guess("123"));
}

#[test]
fn test_every_four_digit_string() {
    let mut valid = 0;
    for n in 0..10_000 {
        let s = format!("{:04}", n);
        assert_eq!(is_valid_guess(&s), reference(&s), "{s}");
        if is_valid_guess(&s) {
            valid += 1;
        }
    }
    // 10 * 9 * 8 * 7 ordered picks of distinct digits.
    assert_eq!(valid, 5040);
}

#[test]
fn test_odd_inputs_agree_with_reference() {
    for s in ["", "0", "01234", "12 3", "１２３４", "12\u{0}3", "abcd", "9876", "-123"] {
        assert_eq!(is_valid_guess(s), reference(s), "{s:?}");
        assert_eq!(Guess::parse(s).is_ok(), reference(s), "{s:?}");
    }
}
