use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// Credential issued to integrate with the payout API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiKey {
    pub id: Uuid,
    pub name: String,
    pub key: String,
    pub created: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl Identifiable for ApiKey {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ApiKey {
    fn name(&self) -> &str {
        &self.name
    }
}
