//! Invoice creation, duplication, status changes and list filtering.

use chrono::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::time::Clock;
use crate::domain::{
    Invoice, InvoiceDraft, InvoiceLineItem, InvoiceStatus, InvoiceTotals, StatusFilter,
};
use crate::validation::forms::validate_invoice_draft;
use crate::validation::ValidationErrors;

use super::{ServiceError, ServiceResult};

/// Suffix appended to the invoice number of a duplicate.
pub const COPY_SUFFIX: &str = "-COPY";
pub const DEFAULT_DUE_IN_DAYS: i64 = 30;

pub struct InvoiceService;

impl InvoiceService {
    /// Prefilled form state: generated number, issued today, due in `due_in_days`.
    pub fn default_draft(clock: &dyn Clock, due_in_days: i64) -> InvoiceDraft {
        let now = clock.now();
        let today = now.date_naive();
        InvoiceDraft {
            invoice_number: format!("INV-{}", now.timestamp_millis()),
            client_name: String::new(),
            client_email: String::new(),
            client_address: None,
            issue_date: today,
            due_date: today + Duration::days(due_in_days),
            items: vec![InvoiceLineItem::blank()],
            notes: None,
            tax_rate: Some(0.0),
        }
    }

    /// Validates `draft` and builds a new draft-status invoice from its billable items.
    ///
    /// Nothing is created when any field fails or no billable line item remains.
    pub fn create(draft: &InvoiceDraft, clock: &dyn Clock) -> ServiceResult<Invoice> {
        let (errors, items) = Self::review(draft);
        if !errors.is_empty() {
            warn!(invoice_number = %draft.invoice_number, %errors, "invoice rejected");
            return Err(ServiceError::Validation(errors));
        }

        let totals = InvoiceTotals::compute(&items, draft.tax_rate());
        let invoice = Invoice {
            id: Uuid::new_v4(),
            invoice_number: draft.invoice_number.trim().to_string(),
            client_name: draft.client_name.trim().to_string(),
            client_email: draft.client_email.trim().to_string(),
            client_address: non_empty(draft.client_address.as_deref()),
            issue_date: draft.issue_date,
            due_date: draft.due_date,
            status: InvoiceStatus::Draft,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            notes: non_empty(draft.notes.as_deref()),
            created_at: clock.now(),
        };
        info!(
            invoice_number = %invoice.invoice_number,
            total = invoice.total,
            "invoice created"
        );
        Ok(invoice)
    }

    /// Copy of `invoice` with a fresh id, a `-COPY` number, draft status and a new timestamp.
    pub fn duplicate(invoice: &Invoice, clock: &dyn Clock) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: format!("{}{}", invoice.invoice_number, COPY_SUFFIX),
            status: InvoiceStatus::Draft,
            created_at: clock.now(),
            ..invoice.clone()
        }
    }

    /// Returns `invoice` moved to `next`, or an error when the lifecycle forbids it.
    pub fn transition(invoice: &Invoice, next: InvoiceStatus) -> ServiceResult<Invoice> {
        if !invoice.status.can_transition_to(next) {
            warn!(
                invoice_number = %invoice.invoice_number,
                from = %invoice.status,
                to = %next,
                "invoice transition rejected"
            );
            return Err(ServiceError::InvalidTransition {
                from: invoice.status,
                to: next,
            });
        }
        info!(invoice_number = %invoice.invoice_number, to = %next, "invoice status updated");
        Ok(Invoice {
            status: next,
            ..invoice.clone()
        })
    }

    /// Replaces the invoice with the same id, leaving the rest of the collection untouched.
    pub fn replace(invoices: &[Invoice], updated: Invoice) -> ServiceResult<Vec<Invoice>> {
        if !invoices.iter().any(|inv| inv.id == updated.id) {
            return Err(ServiceError::NotFound(format!("Invoice {}", updated.id)));
        }
        Ok(invoices
            .iter()
            .map(|inv| {
                if inv.id == updated.id {
                    updated.clone()
                } else {
                    inv.clone()
                }
            })
            .collect())
    }

    /// New collection with `invoice` placed first, as the list shows newest on top.
    pub fn prepend(invoices: &[Invoice], invoice: Invoice) -> Vec<Invoice> {
        std::iter::once(invoice)
            .chain(invoices.iter().cloned())
            .collect()
    }

    /// Invoices whose number, client name or client email contain `search`, in input order.
    pub fn filter<'a>(
        invoices: &'a [Invoice],
        search: &str,
        status: StatusFilter<InvoiceStatus>,
    ) -> Vec<&'a Invoice> {
        invoices
            .iter()
            .filter(|inv| inv.matches_search(search) && status.matches(&inv.status))
            .collect()
    }

    /// Live totals for a form that has not been submitted yet.
    pub fn preview_totals(draft: &InvoiceDraft) -> InvoiceTotals {
        InvoiceTotals::compute(&draft.billable_items(), draft.tax_rate())
    }

    /// Field errors for a draft without attempting creation.
    pub fn check(draft: &InvoiceDraft) -> ValidationErrors {
        Self::review(draft).0
    }

    fn review(draft: &InvoiceDraft) -> (ValidationErrors, Vec<InvoiceLineItem>) {
        let mut errors = validate_invoice_draft(draft);
        let items = draft.billable_items();
        if items.is_empty() {
            errors.push(
                "items",
                "Please add at least one item with description and price",
            );
        }
        for (position, item) in items.iter().enumerate() {
            if !(item.quantity.is_finite() && item.quantity > 0.0) {
                errors.push(
                    format!("items[{position}].quantity"),
                    "Quantity must be greater than 0",
                );
            }
            if !item.price.is_finite() {
                errors.push(
                    format!("items[{position}].price"),
                    "Price must be a valid amount",
                );
            }
        }
        (errors, items)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
