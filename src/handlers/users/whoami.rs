use axum::Extension;

use crate::database::models::user::UserInfo;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// GET /users/me - the currently authenticated user.
pub async fn whoami(Extension(auth): Extension<AuthUser>) -> ApiResponse<UserInfo> {
    ApiResponse::ok(auth.user.info())
}
