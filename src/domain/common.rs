use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a status or kind label does not name a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    type Id: Clone + PartialEq + fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Rounds a monetary amount to two decimal places.
///
/// Aggregates keep full precision internally; call this only when producing
/// display or chart values.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Formats an amount the way summary cards show it, e.g. `$8,450.00`.
pub fn format_currency(value: f64) -> String {
    let rounded = round_cents(value);
    let negative = rounded < 0.0;
    let cents = (rounded.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents % 100
    )
}

/// Status constraint applied by list filters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == status,
        }
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr,
{
    type Err = S::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            value.parse().map(StatusFilter::Only)
        }
    }
}

/// Case-insensitive substring search used by every list filter.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_cents_handles_non_finite_values() {
        assert_eq!(round_cents(f64::NAN), 0.0);
        assert_eq!(round_cents(f64::INFINITY), 0.0);
        assert_eq!(round_cents(12.345_6), 12.35);
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(8450.0), "$8,450.00");
        assert_eq!(format_currency(1200.5), "$1,200.50");
        assert_eq!(format_currency(125.5), "$125.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.1), "-$42.10");
    }

    #[test]
    fn contains_ignore_case_matches_mixed_case() {
        assert!(contains_ignore_case("Monthly payout - January", "PAYOUT"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Affiliate revenue", "bonus"));
    }
}
