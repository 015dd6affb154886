//! Reusable predicates for form rules.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])$").expect("month pattern compiles"));

/// Trimmed length of at least `min` characters.
pub fn min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Untrimmed length of at most `max` characters.
pub fn max_len(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Exactly `count` ASCII digits and nothing else.
pub fn digits(value: &str, count: usize) -> bool {
    digits_between(value, count, count)
}

/// Only ASCII digits, between `min` and `max` of them.
pub fn digits_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max && value.bytes().all(|b| b.is_ascii_digit())
}

/// Two-digit calendar month, `01` through `12`.
pub fn month(value: &str) -> bool {
    MONTH.is_match(value)
}

pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Removes spaces the card input inserts between digit groups.
pub fn strip_spaces(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}
