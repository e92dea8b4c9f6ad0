use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::auth::AUTH_ACCESS;

/// One entry in a user's stored session-token sequence. Insertion order is
/// preserved: index 0 is the first token ever issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    pub access: String,
    pub token: String,
}

impl SessionToken {
    pub fn auth(token: impl Into<String>) -> Self {
        Self {
            access: AUTH_ACCESS.to_string(),
            token: token.into(),
        }
    }
}

/// Full user row. Never serialized to the wire; handlers expose `UserInfo`,
/// so the password hash and the token sequence stay server-side.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub tokens: Json<Vec<SessionToken>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this exact token string is still present in the stored
    /// sequence. Logout removes the entry, so a signature-valid token can
    /// still fail this check.
    pub fn holds_token(&self, token: &str) -> bool {
        self.tokens
            .0
            .iter()
            .any(|entry| entry.access == AUTH_ACCESS && entry.token == token)
    }

    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Public wire view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
}
