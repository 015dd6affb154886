//! Active-session list on the security settings page.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::Session;

use super::{ServiceError, ServiceResult};

const ACTIVE_NOW_MINUTES: i64 = 5;

pub struct SessionService;

impl SessionService {
    /// Drops `id` from the list. Unknown ids leave the list unchanged; the
    /// current session is refused.
    pub fn revoke(sessions: &[Session], id: &str) -> ServiceResult<Vec<Session>> {
        let Some(target) = sessions.iter().find(|session| session.id == id) else {
            warn!(%id, "revoke ignored for unknown session");
            return Ok(sessions.to_vec());
        };
        if target.is_current {
            warn!(%id, "refused to revoke current session");
            return Err(ServiceError::CurrentSession);
        }
        info!(%id, device = %target.device, "session revoked");
        Ok(sessions
            .iter()
            .filter(|session| session.id != id)
            .cloned()
            .collect())
    }

    /// Keeps only the current session.
    pub fn revoke_others(sessions: &[Session]) -> Vec<Session> {
        let next: Vec<Session> = sessions
            .iter()
            .filter(|session| session.is_current)
            .cloned()
            .collect();
        info!(revoked = sessions.len() - next.len(), "other sessions revoked");
        next
    }

    /// Relative label such as `Active now`, `2 hours ago` or `1 day ago`.
    pub fn last_active_label(session: &Session, now: DateTime<Utc>) -> String {
        let elapsed = now - session.last_active;
        let minutes = elapsed.num_minutes().max(0);
        if minutes < ACTIVE_NOW_MINUTES {
            return "Active now".to_string();
        }
        let (count, unit) = if minutes < 60 {
            (minutes, "minute")
        } else if elapsed.num_hours() < 24 {
            (elapsed.num_hours(), "hour")
        } else {
            (elapsed.num_days(), "day")
        };
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} {unit}{plural} ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::{Clock, FixedClock};
    use crate::seed;
    use chrono::NaiveDate;

    #[test]
    fn revoking_another_session_returns_new_list() {
        let sessions = seed::sessions();
        let next = SessionService::revoke(&sessions, "2").unwrap();
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|session| session.id != "2"));
        assert_eq!(sessions.len(), 3);
    }

    #[test]
    fn current_session_cannot_be_revoked() {
        let sessions = seed::sessions();
        let err = SessionService::revoke(&sessions, "1").expect_err("current session");
        assert!(matches!(err, ServiceError::CurrentSession));
    }

    #[test]
    fn unknown_session_is_noop() {
        let sessions = seed::sessions();
        assert_eq!(SessionService::revoke(&sessions, "99").unwrap(), sessions);
    }

    #[test]
    fn revoke_others_keeps_current() {
        let remaining = SessionService::revoke_others(&seed::sessions());
        assert_eq!(remaining.len(), 1);
        assert!(remaining[0].is_current);
    }

    #[test]
    fn labels_follow_elapsed_time() {
        let now = FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 1, 21).unwrap()).now();
        let labels: Vec<String> = seed::sessions()
            .iter()
            .map(|session| SessionService::last_active_label(session, now))
            .collect();
        assert_eq!(labels, vec!["Active now", "2 hours ago", "1 day ago"]);
    }
}
