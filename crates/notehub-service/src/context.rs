//! Request context carrying the authenticated user identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Produced once per request by the session layer and passed into service
/// methods so that every operation knows *who* is acting and from *which*
/// session. Replaces any notion of an ambient "current user".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's email (convenience field).
    pub email: String,
    /// The user's display name (convenience field).
    pub display_name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, email: String, display_name: String) -> Self {
        Self {
            user_id,
            session_id,
            email,
            display_name,
            request_time: Utc::now(),
        }
    }
}
