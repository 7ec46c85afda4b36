//! Session lifecycle manager — start, resolve, end.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use notehub_core::config::session::SessionConfig;
use notehub_core::error::AppError;
use notehub_database::repositories::session::SessionRepository;
use notehub_entity::session::Session;

use super::token::{generate_token, hash_token};

/// Manages the opaque-token session lifecycle.
///
/// Expiration is sliding: every successful [`resolve`](Self::resolve)
/// pushes `expires_at` out by the full lifetime window. There is no
/// concurrent-session limit; each device holds its own session row.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session persistence.
    session_repo: Arc<SessionRepository>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(session_repo: Arc<SessionRepository>, config: SessionConfig) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Starts a session for a user, returning the raw token and the record.
    ///
    /// The raw token is handed to the client exactly once; only its SHA-256
    /// hash is stored.
    pub async fn start(&self, user_id: Uuid) -> Result<(String, Session), AppError> {
        let token = generate_token();
        let now = Utc::now();

        let session = Session {
            id: Uuid::new_v4(),
            user_id,
            token_hash: hash_token(&token),
            created_at: now,
            expires_at: now + self.lifetime(),
            last_seen_at: now,
        };

        let session = self.session_repo.create(&session).await?;

        info!(user_id = %user_id, session_id = %session.id, "Session started");
        Ok((token, session))
    }

    /// Resolves a raw token to its session, extending the sliding window.
    ///
    /// Missing, malformed, unknown, and expired tokens all produce the same
    /// `Authentication` error. Expired rows are deleted on sight.
    pub async fn resolve(&self, token: &str) -> Result<Session, AppError> {
        let session = self
            .session_repo
            .find_by_token_hash(&hash_token(token))
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or expired session"))?;

        if session.is_expired() {
            // The rejection stands either way; a row left behind is
            // cleaned up on the next resolve.
            if let Err(e) = self.session_repo.delete(session.id).await {
                warn!(
                    session_id = %session.id,
                    error = %e,
                    "Failed to delete expired session"
                );
            }
            return Err(AppError::authentication("Invalid or expired session"));
        }

        let now = Utc::now();
        self.session_repo
            .extend(session.id, now + self.lifetime(), now)
            .await?;

        Ok(session)
    }

    /// Ends a session immediately. Unknown tokens are a no-op.
    pub async fn end(&self, token: &str) -> Result<(), AppError> {
        if let Some(session) = self
            .session_repo
            .find_by_token_hash(&hash_token(token))
            .await?
        {
            self.session_repo.delete(session.id).await?;
            info!(
                user_id = %session.user_id,
                session_id = %session.id,
                "Session ended"
            );
        }
        Ok(())
    }

    fn lifetime(&self) -> Duration {
        Duration::days(self.config.lifetime_days as i64)
    }
}
