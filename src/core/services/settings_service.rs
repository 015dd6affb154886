use serde::{Deserialize, Serialize};
use tracing::info;

use crate::validation::forms::{EmailChangeForm, PasswordChangeForm, ProfileForm};

use super::ServiceResult;

/// Profile fields after validation, with blank optionals dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter avatar fallback, e.g. `JD`.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Account settings submissions.
pub struct SettingsService;

impl SettingsService {
    pub fn change_password(form: &PasswordChangeForm) -> ServiceResult<()> {
        form.validate()?;
        info!("password change accepted");
        Ok(())
    }

    /// Returns the new address once both entries agree.
    pub fn change_email(form: &EmailChangeForm) -> ServiceResult<String> {
        form.validate()?;
        let email = form.email.trim().to_string();
        info!(%email, "email change requested");
        Ok(email)
    }

    pub fn update_profile(form: &ProfileForm) -> ServiceResult<Profile> {
        form.validate()?;
        info!("profile updated");
        Ok(Profile {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: optional(&form.phone),
            address: optional(&form.address),
            city: optional(&form.city),
            country: optional(&form.country),
            bio: optional(&form.bio),
        })
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
