use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use super::utils::validate_text;
use crate::context::AppContext;
use crate::database::models::todo::Todo;
use crate::database::todos::TodoStore;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// Only `text` is accepted at creation; completion state always starts
/// false/null no matter what the caller sends.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: Option<String>,
}

/// POST /todos - create a todo owned by the caller.
pub async fn todo_create(
    State(ctx): State<AppContext>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<ApiResponse<Todo>, ApiError> {
    let text = validate_text(payload.text.as_deref().unwrap_or(""))?;

    let todo = TodoStore::new(ctx.db.clone())
        .create(auth.user.id, &text)
        .await?;

    Ok(ApiResponse::created(todo))
}
