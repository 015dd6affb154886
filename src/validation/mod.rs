//! Field-level validation built from named rules.
//!
//! Each [`Rule`] pairs a field name with a pure predicate and the message shown
//! when the predicate fails. A [`Validator`] runs its rules in order and
//! reports the first failure of every field, so callers get one message per
//! input just like a form would show it.

pub mod forms;
pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single failed rule, addressed to the field the user must correct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty collection of field errors produced by a validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Records an error unless the field already carries one.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.has_field(&field) {
            return;
        }
        self.errors.push(FieldError::new(field, message));
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        for error in other.errors {
            self.push(error.field, error.message);
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Message attached to `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(FieldError::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Named predicate over a record of type `T`.
pub struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: Predicate<T>,
}

impl<T> Rule<T> {
    pub fn new<F>(field: &'static str, message: &'static str, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            field,
            message,
            check: Box::new(check),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn passes(&self, value: &T) -> bool {
        (self.check)(value)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered set of rules forming a record-level validator.
#[derive(Debug)]
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> Validator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule<F>(mut self, field: &'static str, message: &'static str, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(field, message, check));
        self
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Collects every failing field. Later rules on an already failing field are skipped.
    pub fn errors(&self, value: &T) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for rule in &self.rules {
            if errors.has_field(rule.field) {
                continue;
            }
            if !rule.passes(value) {
                errors.push(rule.field, rule.message);
            }
        }
        errors
    }

    pub fn validate(&self, value: &T) -> Result<(), ValidationErrors> {
        self.errors(value).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        age: u32,
    }

    fn validator() -> Validator<Sample> {
        Validator::new()
            .rule("name", "Name is required", |s: &Sample| !s.name.is_empty())
            .rule("name", "Name is too short", |s: &Sample| s.name.len() >= 3)
            .rule("age", "Must be an adult", |s: &Sample| s.age >= 18)
    }

    #[test]
    fn first_failure_per_field_is_reported() {
        let errors = validator()
            .validate(&Sample {
                name: String::new(),
                age: 4,
            })
            .expect_err("both fields invalid");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(errors.message_for("age"), Some("Must be an adult"));
    }

    #[test]
    fn valid_record_passes() {
        assert!(validator()
            .validate(&Sample {
                name: "Ada".into(),
                age: 36,
            })
            .is_ok());
    }

    #[test]
    fn display_joins_field_messages() {
        let mut errors = ValidationErrors::single("email", "Invalid email address");
        errors.push("email", "ignored duplicate");
        errors.push("zip", "ZIP code required");
        assert_eq!(
            errors.to_string(),
            "email: Invalid email address; zip: ZIP code required"
        );
    }
}
