use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity, UnknownVariant};

/// Mask prefix shown in front of the visible trailing digits.
pub const MASK_PREFIX: &str = "••••";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PayoutMethodKind {
    Card,
    Bank,
    Paypal,
}

impl PayoutMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutMethodKind::Card => "card",
            PayoutMethodKind::Bank => "bank",
            PayoutMethodKind::Paypal => "paypal",
        }
    }

    /// Label used in the payout request picker.
    pub fn label(&self) -> &'static str {
        match self {
            PayoutMethodKind::Card => "Debit Card",
            PayoutMethodKind::Bank => "Bank Transfer",
            PayoutMethodKind::Paypal => "PayPal",
        }
    }
}

impl fmt::Display for PayoutMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutMethodKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PayoutMethodKind::Card),
            "bank" => Ok(PayoutMethodKind::Bank),
            "paypal" => Ok(PayoutMethodKind::Paypal),
            _ => Err(UnknownVariant::new("payout method", value)),
        }
    }
}

/// A destination payouts can be sent to. `details` never holds unmasked numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutMethod {
    pub id: Uuid,
    pub kind: PayoutMethodKind,
    pub name: String,
    pub details: String,
    pub is_default: bool,
}

impl PayoutMethod {
    pub fn new(kind: PayoutMethodKind, name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            details: details.into(),
            is_default: false,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

impl Identifiable for PayoutMethod {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for PayoutMethod {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for PayoutMethod {
    fn display_label(&self) -> String {
        if self.is_default {
            format!("{} {} (Default)", self.name, self.details)
        } else {
            format!("{} {}", self.name, self.details)
        }
    }
}

/// Replaces every character but the last four with the mask prefix.
pub fn mask_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|ch| !ch.is_whitespace()).collect();
    let start = digits.len().saturating_sub(4);
    let tail: String = digits[start..].iter().collect();
    format!("{MASK_PREFIX}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_last_four() {
        assert_eq!(mask_number("4111 1111 1111 8901"), "••••8901");
        assert_eq!(mask_number("12"), "••••12");
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            PayoutMethodKind::Card,
            PayoutMethodKind::Bank,
            PayoutMethodKind::Paypal,
        ] {
            assert_eq!(kind.as_str().parse::<PayoutMethodKind>().unwrap(), kind);
        }
    }
}
