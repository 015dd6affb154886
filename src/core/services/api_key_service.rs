use tracing::info;
use uuid::Uuid;

use crate::core::time::Clock;
use crate::domain::ApiKey;
use crate::validation::{rules, ValidationErrors};

use super::{ServiceError, ServiceResult};

pub const LIVE_KEY_PREFIX: &str = "pk_live_";
const KEY_BODY_LEN: usize = 26;
const MASK_VISIBLE_PREFIX: usize = 12;
const MASK_VISIBLE_SUFFIX: usize = 4;

pub struct ApiKeyService;

impl ApiKeyService {
    /// Issues a new live key named `name` and appends it to `keys`.
    pub fn create(keys: &[ApiKey], name: &str, clock: &dyn Clock) -> ServiceResult<Vec<ApiKey>> {
        if !rules::not_blank(name) {
            return Err(ServiceError::Validation(ValidationErrors::single(
                "name",
                "Please enter a name for the API key",
            )));
        }
        let body: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(KEY_BODY_LEN)
            .collect();
        let key = ApiKey {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            key: format!("{LIVE_KEY_PREFIX}{body}"),
            created: clock.today(),
            last_used: None,
        };
        info!(name = %key.name, "api key created");
        let mut next = keys.to_vec();
        next.push(key);
        Ok(next)
    }

    /// Removes `id`; unknown ids leave the collection unchanged.
    pub fn remove(keys: &[ApiKey], id: Uuid) -> Vec<ApiKey> {
        keys.iter().filter(|key| key.id != id).cloned().collect()
    }

    /// Hides the middle of a key. Keys of 16 chars or fewer are hidden entirely.
    pub fn mask(key: &str) -> String {
        let chars: Vec<char> = key.chars().collect();
        let len = chars.len();
        if len <= MASK_VISIBLE_PREFIX + MASK_VISIBLE_SUFFIX {
            return "•".repeat(len);
        }
        let head: String = chars[..MASK_VISIBLE_PREFIX].iter().collect();
        let tail: String = chars[len - MASK_VISIBLE_SUFFIX..].iter().collect();
        format!(
            "{head}{}{tail}",
            "*".repeat(len - MASK_VISIBLE_PREFIX - MASK_VISIBLE_SUFFIX)
        )
    }

    /// "Never" until the key is first used.
    pub fn last_used_label(key: &ApiKey) -> String {
        key.last_used
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "Never".to_string())
    }
}
