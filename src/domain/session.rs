use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// A signed-in device listed under active sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub device: String,
    pub location: String,
    pub ip_address: String,
    pub last_active: DateTime<Utc>,
    /// The session making the request; it can never be revoked from itself.
    pub is_current: bool,
}

impl Identifiable for Session {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Displayable for Session {
    fn display_label(&self) -> String {
        format!("{} ({})", self.device, self.location)
    }
}
