use thiserror::Error;
use uuid::Uuid;

use crate::auth::{self, TokenError};
use crate::context::AppContext;
use crate::database::models::user::SessionToken;
use crate::database::users::UserStore;
use crate::database::StoreError;

#[derive(Debug, Error)]
pub enum TokenServiceError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Issues, verifies, and revokes session tokens.
///
/// Tokens are self-contained — the signature alone proves authenticity, no
/// session-table lookup needed — but each issued string is also appended to
/// the owning user's stored sequence, because the signature cannot express
/// "this token was logged out". Revocation removes the stored entry.
pub struct TokenService {
    users: UserStore,
    secret: String,
}

impl TokenService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            users: UserStore::new(ctx.db.clone()),
            secret: ctx.config.security.token_secret.clone(),
        }
    }

    /// Sign a token for the user and persist it in their token sequence.
    pub async fn issue(&self, user_id: Uuid) -> Result<String, TokenServiceError> {
        let token = auth::sign_token(&self.secret, user_id)?;
        self.users
            .append_token(user_id, &SessionToken::auth(token.clone()))
            .await?;
        Ok(token)
    }

    /// Validate signature and payload; returns the owning user id. Stored
    /// presence is the authentication gate's concern, not this method's.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        auth::verify_token(&self.secret, token)
    }

    /// Remove one issued token from the user's sequence. Idempotent:
    /// revoking an absent token succeeds.
    pub async fn revoke(&self, user_id: Uuid, token: &str) -> Result<(), StoreError> {
        self.users.remove_token(user_id, token).await
    }
}
