use axum::{extract::State, Json};
use serde::Deserialize;

use super::utils::{validate_email_format, validate_password_format};
use crate::auth::password::hash_secret;
use crate::context::AppContext;
use crate::database::models::user::UserInfo;
use crate::database::users::UserStore;
use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::services::token_service::TokenService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /users - register a new account.
///
/// Validates the email shape and password length before touching the store,
/// persists the bcrypt hash (never the plaintext), and issues the first
/// session token, returned via the `x-auth` response header. A duplicate
/// email surfaces from the store's unique constraint and fails with 400 like
/// any other validation error.
pub async fn register(
    State(ctx): State<AppContext>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ApiResponse<UserInfo>, ApiError> {
    let email = payload.email.as_deref().unwrap_or("").trim().to_string();
    let password = payload.password.as_deref().unwrap_or("");

    validate_email_format(&email)?;
    validate_password_format(password)?;

    let hash = hash_secret(password, ctx.config.security.bcrypt_cost)?;
    let user = UserStore::new(ctx.db.clone()).create(&email, &hash).await?;
    let token = TokenService::new(&ctx).issue(user.id).await?;

    Ok(ApiResponse::created(user.info()).session_token(token))
}
