//! Payout method registry and payout requests.
//!
//! Every operation takes the current collection and returns a new snapshot,
//! so a view reading the collection always sees either the old or the new
//! state. The registry keeps exactly one default method whenever it is
//! non-empty.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::payout::{mask_number, PayoutMethod, PayoutMethodKind};
use crate::validation::forms::PaymentMethodForm;
use crate::validation::ValidationErrors;

use super::{ServiceError, ServiceResult};

/// A validated request to withdraw funds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PayoutRequest {
    pub amount: f64,
    pub method: PayoutMethodKind,
}

pub struct PayoutService;

impl PayoutService {
    /// Appends `method` as non-default, except into an empty registry where it becomes the default.
    pub fn add(methods: &[PayoutMethod], method: PayoutMethod) -> Vec<PayoutMethod> {
        let is_default = methods.is_empty();
        info!(name = %method.name, kind = %method.kind, is_default, "payout method added");
        let mut next = methods.to_vec();
        next.push(PayoutMethod {
            is_default,
            ..method
        });
        next
    }

    /// Makes `id` the only default. Unknown ids leave the collection unchanged.
    pub fn set_default(methods: &[PayoutMethod], id: Uuid) -> Vec<PayoutMethod> {
        if !methods.iter().any(|method| method.id == id) {
            warn!(%id, "set default ignored for unknown payout method");
            return methods.to_vec();
        }
        info!(%id, "default payout method updated");
        methods
            .iter()
            .map(|method| PayoutMethod {
                is_default: method.id == id,
                ..method.clone()
            })
            .collect()
    }

    /// Removes `id`. When the default goes, the first remaining method is promoted.
    pub fn remove(methods: &[PayoutMethod], id: Uuid) -> Vec<PayoutMethod> {
        let Some(removed) = methods.iter().find(|method| method.id == id) else {
            warn!(%id, "remove ignored for unknown payout method");
            return methods.to_vec();
        };
        let mut next: Vec<PayoutMethod> = methods
            .iter()
            .filter(|method| method.id != id)
            .cloned()
            .collect();
        if removed.is_default {
            if let Some(first) = next.first_mut() {
                first.is_default = true;
                info!(promoted = %first.id, "default payout method promoted");
            }
        }
        info!(%id, "payout method removed");
        next
    }

    pub fn default_method(methods: &[PayoutMethod]) -> Option<&PayoutMethod> {
        methods.iter().find(|method| method.is_default)
    }

    /// Validates an add-payment-method form and builds the masked method it describes.
    pub fn method_from_form(form: &PaymentMethodForm) -> ServiceResult<PayoutMethod> {
        form.validate()?;
        let method = match form {
            PaymentMethodForm::Card(card) => PayoutMethod::new(
                PayoutMethodKind::Card,
                format!("{}'s Card", card.cardholder_name.trim()),
                mask_number(&card.card_number),
            ),
            PaymentMethodForm::Bank(bank) => PayoutMethod::new(
                PayoutMethodKind::Bank,
                bank.bank_name.trim(),
                mask_number(&bank.account_number),
            ),
            PaymentMethodForm::Paypal(paypal) => PayoutMethod::new(
                PayoutMethodKind::Paypal,
                "PayPal Account",
                paypal.email.trim(),
            ),
        };
        Ok(method)
    }

    /// Checks a payout request form against the balance available for withdrawal.
    pub fn validate_request(
        amount: &str,
        method: Option<PayoutMethodKind>,
        available: f64,
    ) -> ServiceResult<PayoutRequest> {
        let mut errors = ValidationErrors::new();
        let parsed = amount.trim().parse::<f64>().ok().filter(|value| value.is_finite());
        match parsed {
            None if amount.trim().is_empty() => errors.push("amount", "Please fill in all fields"),
            None => errors.push("amount", "Amount must be a number"),
            Some(value) if value <= 0.0 => errors.push("amount", "Amount must be greater than 0"),
            Some(value) if value > available => {
                errors.push("amount", "Amount exceeds the available balance")
            }
            Some(_) => {}
        }
        if method.is_none() {
            errors.push("method", "Please fill in all fields");
        }
        match (parsed, method, errors.is_empty()) {
            (Some(amount), Some(method), true) => {
                info!(amount, method = %method, "payout requested");
                Ok(PayoutRequest { amount, method })
            }
            _ => Err(ServiceError::Validation(errors)),
        }
    }
}
