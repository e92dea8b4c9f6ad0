use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::SESSION_TOKEN_HEADER;
use crate::context::AppContext;
use crate::database::models::user::User;
use crate::database::users::UserStore;
use crate::error::ApiError;
use crate::services::token_service::TokenService;

/// Authenticated caller, bound into request extensions by the gate for the
/// duration of one request. Never persisted.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

/// Session authentication gate for protected routes.
///
/// Admits a request only when the `x-auth` header carries a token that
/// (1) verifies cryptographically, (2) resolves to an existing user, and
/// (3) is still present in that user's stored token sequence. The last check
/// is what makes logout effective: a logged-out token keeps a valid
/// signature but is gone from the sequence. Every failure is a 401; there
/// are no transient auth failures and no retries.
pub async fn require_auth(
    State(ctx): State<AppContext>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_session_token(request.headers())?;

    let user_id = TokenService::new(&ctx)
        .verify(&token)
        .map_err(|_| ApiError::unauthorized("Invalid session token"))?;

    // A deleted user with a still-valid signature is its own failure case,
    // distinct from a bad signature.
    let user = UserStore::new(ctx.db.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unknown user for session token"))?;

    if !user.holds_token(&token) {
        return Err(ApiError::unauthorized("Session token has been revoked"));
    }

    request.extensions_mut().insert(AuthUser { user, token });
    Ok(next.run(request).await)
}

/// Extract the session token from the fixed request header.
fn extract_session_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(SESSION_TOKEN_HEADER)
        .ok_or_else(|| ApiError::unauthorized("Missing session token header"))?;

    let token = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid session token header"))?;

    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("Empty session token"));
    }

    Ok(token.to_string())
}
