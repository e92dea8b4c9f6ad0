use axum::{extract::State, Extension};

use crate::context::AppContext;
use crate::database::models::todo::Todo;
use crate::database::todos::TodoStore;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// GET /todos - every todo created by the caller, store-native order.
/// Other users' todos are never visible here.
pub async fn todo_list(
    State(ctx): State<AppContext>,
    Extension(auth): Extension<AuthUser>,
) -> Result<ApiResponse<Vec<Todo>>, ApiError> {
    let todos = TodoStore::new(ctx.db.clone()).list_for(auth.user.id).await?;
    Ok(ApiResponse::ok(todos))
}
