//! Validators for every form the dashboard submits.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::invoice::InvoiceDraft;
use crate::domain::payout::PayoutMethodKind;

use super::rules::{self, digits, digits_between, is_email, max_len, min_len, not_blank};
use super::{ValidationErrors, Validator};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardForm {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub billing_zip: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountType {
    #[default]
    Checking,
    Savings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankForm {
    pub account_holder_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub account_type: BankAccountType,
    pub bank_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaypalForm {
    pub email: String,
    pub confirm_email: String,
}

/// Add-payment-method form, discriminated by the selected method type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentMethodForm {
    Card(CardForm),
    Bank(BankForm),
    Paypal(PaypalForm),
}

impl PaymentMethodForm {
    pub fn kind(&self) -> PayoutMethodKind {
        match self {
            PaymentMethodForm::Card(_) => PayoutMethodKind::Card,
            PaymentMethodForm::Bank(_) => PayoutMethodKind::Bank,
            PaymentMethodForm::Paypal(_) => PayoutMethodKind::Paypal,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            PaymentMethodForm::Card(form) => CARD.validate(form),
            PaymentMethodForm::Bank(form) => BANK.validate(form),
            PaymentMethodForm::Paypal(form) => PAYPAL.validate(form),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PASSWORD.validate(self)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailChangeForm {
    pub email: String,
    pub confirm_email: String,
}

impl EmailChangeForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        EMAIL_CHANGE.validate(self)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PROFILE.validate(self)
    }
}

pub const BIO_MAX_CHARS: usize = 500;

static CARD: Lazy<Validator<CardForm>> = Lazy::new(|| {
    Validator::new()
        .rule(
            "cardholder_name",
            "Name must be at least 3 characters",
            |f: &CardForm| min_len(&f.cardholder_name, 3),
        )
        .rule(
            "card_number",
            "Card number must be 16 digits",
            |f: &CardForm| digits(&rules::strip_spaces(&f.card_number), 16),
        )
        .rule("expiry_month", "Invalid month", |f: &CardForm| {
            rules::month(&f.expiry_month)
        })
        .rule("expiry_year", "Invalid year", |f: &CardForm| {
            digits(&f.expiry_year, 2)
        })
        .rule("cvv", "CVV must be 3 or 4 digits", |f: &CardForm| {
            digits_between(&f.cvv, 3, 4)
        })
        .rule("billing_zip", "ZIP code required", |f: &CardForm| {
            min_len(&f.billing_zip, 5)
        })
});

static BANK: Lazy<Validator<BankForm>> = Lazy::new(|| {
    Validator::new()
        .rule(
            "account_holder_name",
            "Name must be at least 3 characters",
            |f: &BankForm| min_len(&f.account_holder_name, 3),
        )
        .rule(
            "account_number",
            "Account number must be 8 to 17 digits",
            |f: &BankForm| digits_between(&rules::strip_spaces(&f.account_number), 8, 17),
        )
        .rule(
            "routing_number",
            "Routing number must be 9 digits",
            |f: &BankForm| digits(&f.routing_number, 9),
        )
        .rule("bank_name", "Bank name required", |f: &BankForm| {
            min_len(&f.bank_name, 2)
        })
});

static PAYPAL: Lazy<Validator<PaypalForm>> = Lazy::new(|| {
    Validator::new()
        .rule("email", "Invalid email address", |f: &PaypalForm| {
            is_email(&f.email)
        })
        .rule("confirm_email", "Invalid email address", |f: &PaypalForm| {
            is_email(&f.confirm_email)
        })
        .rule("confirm_email", "Emails don't match", |f: &PaypalForm| {
            f.email.trim() == f.confirm_email.trim()
        })
});

static PASSWORD: Lazy<Validator<PasswordChangeForm>> = Lazy::new(|| {
    Validator::new()
        .rule(
            "current_password",
            "Current password is required",
            |f: &PasswordChangeForm| !f.current_password.is_empty(),
        )
        .rule(
            "new_password",
            "Password must be at least 8 characters",
            |f: &PasswordChangeForm| f.new_password.chars().count() >= 8,
        )
        .rule(
            "confirm_password",
            "Please confirm your password",
            |f: &PasswordChangeForm| f.confirm_password.chars().count() >= 8,
        )
        .rule(
            "confirm_password",
            "Passwords don't match",
            |f: &PasswordChangeForm| f.new_password == f.confirm_password,
        )
});

static EMAIL_CHANGE: Lazy<Validator<EmailChangeForm>> = Lazy::new(|| {
    Validator::new()
        .rule("email", "Invalid email address", |f: &EmailChangeForm| {
            is_email(&f.email)
        })
        .rule(
            "confirm_email",
            "Invalid email address",
            |f: &EmailChangeForm| is_email(&f.confirm_email),
        )
        .rule("confirm_email", "Emails don't match", |f: &EmailChangeForm| {
            f.email.trim() == f.confirm_email.trim()
        })
});

static PROFILE: Lazy<Validator<ProfileForm>> = Lazy::new(|| {
    Validator::new()
        .rule(
            "first_name",
            "First name must be at least 2 characters",
            |f: &ProfileForm| min_len(&f.first_name, 2),
        )
        .rule(
            "last_name",
            "Last name must be at least 2 characters",
            |f: &ProfileForm| min_len(&f.last_name, 2),
        )
        .rule("email", "Invalid email address", |f: &ProfileForm| {
            is_email(&f.email)
        })
        .rule(
            "bio",
            "Bio must be less than 500 characters",
            |f: &ProfileForm| {
                f.bio
                    .as_deref()
                    .map_or(true, |bio| max_len(bio, BIO_MAX_CHARS))
            },
        )
});

static INVOICE: Lazy<Validator<InvoiceDraft>> = Lazy::new(|| {
    Validator::new()
        .rule(
            "client_name",
            "Client name is required",
            |d: &InvoiceDraft| min_len(&d.client_name, 2),
        )
        .rule("client_email", "Invalid email address", |d: &InvoiceDraft| {
            is_email(&d.client_email)
        })
        .rule(
            "invoice_number",
            "Invoice number is required",
            |d: &InvoiceDraft| not_blank(&d.invoice_number),
        )
        .rule(
            "due_date",
            "Due date cannot be before the issue date",
            |d: &InvoiceDraft| d.due_date >= d.issue_date,
        )
        .rule(
            "tax_rate",
            "Tax rate must be between 0 and 100",
            |d: &InvoiceDraft| d.tax_rate.map_or(true, |rate| rules::in_range(rate, 0.0, 100.0)),
        )
});

/// Header-level checks for an invoice draft. Line items are checked by the invoice service.
pub fn validate_invoice_draft(draft: &InvoiceDraft) -> ValidationErrors {
    INVOICE.errors(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> CardForm {
        CardForm {
            cardholder_name: "John Doe".into(),
            card_number: "4111 1111 1111 8901".into(),
            expiry_month: "09".into(),
            expiry_year: "27".into(),
            cvv: "123".into(),
            billing_zip: "10001".into(),
        }
    }

    #[test]
    fn card_form_accepts_spaced_number() {
        assert!(PaymentMethodForm::Card(valid_card()).validate().is_ok());
    }

    #[test]
    fn card_form_reports_each_bad_field() {
        let form = CardForm {
            card_number: "4111".into(),
            expiry_month: "13".into(),
            cvv: "12".into(),
            ..valid_card()
        };
        let errors = PaymentMethodForm::Card(form)
            .validate()
            .expect_err("card invalid");
        assert_eq!(
            errors.message_for("card_number"),
            Some("Card number must be 16 digits")
        );
        assert_eq!(errors.message_for("expiry_month"), Some("Invalid month"));
        assert_eq!(errors.message_for("cvv"), Some("CVV must be 3 or 4 digits"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn bank_form_requires_nine_digit_routing_number() {
        let form = BankForm {
            account_holder_name: "Jane Roe".into(),
            account_number: "000123457623".into(),
            routing_number: "02100002".into(),
            account_type: BankAccountType::Savings,
            bank_name: "Chase".into(),
        };
        let errors = PaymentMethodForm::Bank(form)
            .validate()
            .expect_err("routing number short");
        assert_eq!(
            errors.message_for("routing_number"),
            Some("Routing number must be 9 digits")
        );
    }

    #[test]
    fn bank_account_number_must_be_digits() {
        let mut form = BankForm {
            account_holder_name: "Jane Roe".into(),
            account_number: "abcdefgh".into(),
            routing_number: "021000021".into(),
            account_type: BankAccountType::Checking,
            bank_name: "Chase".into(),
        };
        let errors = PaymentMethodForm::Bank(form.clone())
            .validate()
            .expect_err("letters in account number");
        assert_eq!(
            errors.message_for("account_number"),
            Some("Account number must be 8 to 17 digits")
        );

        form.account_number = "123456789012345678".into();
        assert!(PaymentMethodForm::Bank(form.clone()).validate().is_err());

        form.account_number = "0001 2345 7623".into();
        assert!(PaymentMethodForm::Bank(form).validate().is_ok());
    }

    #[test]
    fn paypal_confirmation_must_match() {
        let form = PaypalForm {
            email: "user@example.com".into(),
            confirm_email: "other@example.com".into(),
        };
        let errors = PaymentMethodForm::Paypal(form)
            .validate()
            .expect_err("emails differ");
        assert_eq!(errors.message_for("confirm_email"), Some("Emails don't match"));
    }

    #[test]
    fn password_change_requires_matching_confirmation() {
        let form = PasswordChangeForm {
            current_password: "old-secret".into(),
            new_password: "new-secret-1".into(),
            confirm_password: "new-secret-2".into(),
        };
        let errors = form.validate().expect_err("mismatch");
        assert_eq!(
            errors.message_for("confirm_password"),
            Some("Passwords don't match")
        );
    }

    #[test]
    fn profile_bio_is_capped() {
        let form = ProfileForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            bio: Some("x".repeat(BIO_MAX_CHARS + 1)),
            ..ProfileForm::default()
        };
        let errors = form.validate().expect_err("bio too long");
        assert!(errors.has_field("bio"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn payment_form_deserializes_from_tagged_json() {
        let json = r#"{"type":"paypal","email":"a@b.co","confirm_email":"a@b.co"}"#;
        let form: PaymentMethodForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.kind(), PayoutMethodKind::Paypal);
        assert!(form.validate().is_ok());
    }
}
