use axum::{
    extract::{Path, State},
    Extension,
};

use super::utils::parse_todo_id;
use crate::context::AppContext;
use crate::database::models::todo::Todo;
use crate::database::todos::TodoStore;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// GET /todos/:id - show a single todo.
///
/// Someone else's todo and a nonexistent one both answer 404.
pub async fn todo_show(
    State(ctx): State<AppContext>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Todo>, ApiError> {
    let id = parse_todo_id(&id)?;

    let todo = TodoStore::new(ctx.db.clone())
        .find_for(auth.user.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    Ok(ApiResponse::ok(todo))
}
