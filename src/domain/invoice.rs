use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{contains_ignore_case, Displayable, Identifiable, UnknownVariant};

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: InvoiceStatus) -> bool {
        use InvoiceStatus::*;
        matches!(
            (self, next),
            (Draft, Sent)
                | (Draft, Paid)
                | (Sent, Paid)
                | (Draft, Overdue)
                | (Sent, Overdue)
                | (Overdue, Paid)
        )
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(UnknownVariant::new("invoice status", value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: f64,
    pub price: f64,
}

impl InvoiceLineItem {
    pub fn new(description: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            price,
        }
    }

    /// Blank rows the form starts with.
    pub fn blank() -> Self {
        Self::new("", 1.0, 0.0)
    }

    /// A row counts toward the invoice only with a description and a positive price.
    pub fn is_billable(&self) -> bool {
        !self.description.trim().is_empty() && self.price > 0.0
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Subtotal, tax and total derived from a set of line items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    pub fn compute(items: &[InvoiceLineItem], tax_rate: f64) -> Self {
        let subtotal: f64 = items.iter().map(InvoiceLineItem::line_total).sum();
        let tax = subtotal * tax_rate / 100.0;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_address: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceLineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    /// True when `search` occurs in the invoice number, client name or client email.
    pub fn matches_search(&self, search: &str) -> bool {
        contains_ignore_case(&self.invoice_number, search)
            || contains_ignore_case(&self.client_name, search)
            || contains_ignore_case(&self.client_email, search)
    }
}

impl Identifiable for Invoice {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Invoice {
    fn display_label(&self) -> String {
        format!("{} for {} ({})", self.invoice_number, self.client_name, self.status)
    }
}

/// Unvalidated invoice form input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub client_address: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceLineItem>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

impl InvoiceDraft {
    pub fn tax_rate(&self) -> f64 {
        self.tax_rate.unwrap_or(0.0)
    }

    /// Line items that will actually be billed.
    pub fn billable_items(&self) -> Vec<InvoiceLineItem> {
        self.items
            .iter()
            .filter(|item| item.is_billable())
            .cloned()
            .collect()
    }
}
