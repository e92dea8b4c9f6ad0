use axum::{extract::State, Extension};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;
use crate::services::token_service::TokenService;

/// DELETE /users/me/token - revoke the presented session token.
///
/// Always 204: revoking a token that is already gone is success by design,
/// not an error.
pub async fn logout(
    State(ctx): State<AppContext>,
    Extension(auth): Extension<AuthUser>,
) -> Result<ApiResponse<()>, ApiError> {
    TokenService::new(&ctx)
        .revoke(auth.user.id, &auth.token)
        .await?;
    Ok(ApiResponse::no_content())
}
