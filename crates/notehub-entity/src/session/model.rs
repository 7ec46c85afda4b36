//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An active user session.
///
/// Sessions are created on login and deleted on logout or expiry. Only a
/// SHA-256 hash of the opaque token is stored; the raw token is returned
/// to the client once and never persisted. Expiration is sliding: every
/// resolved request extends `expires_at` by the full lifetime window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 hash of the opaque session token.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// Last time the session was resolved.
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "abc123".to_string(),
            created_at: now,
            expires_at,
            last_seen_at: now,
        }
    }

    #[test]
    fn test_is_expired() {
        assert!(session(Utc::now() - Duration::seconds(1)).is_expired());
        assert!(!session(Utc::now() + Duration::days(30)).is_expired());
    }
}
