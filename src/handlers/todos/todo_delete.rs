use axum::{
    extract::{Path, State},
    Extension,
};

use super::utils::parse_todo_id;
use crate::context::AppContext;
use crate::database::todos::TodoStore;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// DELETE /todos/:id - remove a todo; 204 on success, 404 for a malformed
/// id, an unknown id, or someone else's todo.
pub async fn todo_delete(
    State(ctx): State<AppContext>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = parse_todo_id(&id)?;

    let deleted = TodoStore::new(ctx.db.clone())
        .delete_for(auth.user.id, id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found("Todo not found"));
    }

    Ok(ApiResponse::no_content())
}
