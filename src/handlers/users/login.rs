use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::password::verify_secret;
use crate::context::AppContext;
use crate::database::models::user::UserInfo;
use crate::database::users::UserStore;
use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::services::token_service::TokenService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /users/login - authenticate and receive a fresh session token.
///
/// An unknown email and a wrong password produce the same 401; the caller
/// cannot tell them apart. Each login appends a new token to the stored
/// sequence rather than replacing earlier ones, so a user can hold several
/// concurrent sessions.
pub async fn login(
    State(ctx): State<AppContext>,
    Json(payload): Json<LoginRequest>,
) -> Result<ApiResponse<UserInfo>, ApiError> {
    let email = payload.email.as_deref().unwrap_or("").trim();
    let password = payload.password.as_deref().unwrap_or("");

    let user = UserStore::new(ctx.db.clone())
        .find_by_email(email)
        .await?
        .filter(|user| verify_secret(password, &user.password))
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let token = TokenService::new(&ctx).issue(user.id).await?;

    Ok(ApiResponse::ok(user.info()).session_token(token))
}
