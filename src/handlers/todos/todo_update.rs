use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use super::utils::{parse_todo_id, validate_text};
use crate::context::AppContext;
use crate::database::models::todo::{resolve_completion, Todo};
use crate::database::todos::TodoStore;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// The patch whitelist. Any other field in the body (including a
/// caller-supplied `completedAt`) is simply not representable here.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// PATCH /todos/:id - partial update restricted to {text, completed}.
///
/// `completed: true` stamps `completedAt` with the current epoch millis; a
/// false or omitted `completed` forces the todo back to uncompleted and
/// clears the timestamp. Responds 201 on success — kept as-is for wire
/// compatibility with existing clients.
pub async fn todo_update(
    State(ctx): State<AppContext>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<ApiResponse<Todo>, ApiError> {
    let id = parse_todo_id(&id)?;

    let text = match payload.text.as_deref() {
        Some(text) => Some(validate_text(text)?),
        None => None,
    };
    let (completed, completed_at) = resolve_completion(payload.completed);

    let todo = TodoStore::new(ctx.db.clone())
        .update_for(auth.user.id, id, text.as_deref(), completed, completed_at)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    Ok(ApiResponse::created(todo))
}
