use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, Identifiable, UnknownVariant};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Failed,
    Warning,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityStatus::Success => "success",
            ActivityStatus::Failed => "failed",
            ActivityStatus::Warning => "warning",
        };
        f.write_str(label)
    }
}

impl FromStr for ActivityStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(ActivityStatus::Success),
            "failed" => Ok(ActivityStatus::Failed),
            "warning" => Ok(ActivityStatus::Warning),
            _ => Err(UnknownVariant::new("activity status", value)),
        }
    }
}

/// Security-relevant account event shown in the activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub action: String,
    pub description: String,
    pub ip_address: String,
    pub location: String,
    pub timestamp: NaiveDateTime,
    pub status: ActivityStatus,
}

impl Activity {
    pub fn matches_search(&self, search: &str) -> bool {
        [
            &self.action,
            &self.description,
            &self.ip_address,
            &self.location,
        ]
        .iter()
        .any(|field| contains_ignore_case(field, search))
    }
}

impl Identifiable for Activity {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}
