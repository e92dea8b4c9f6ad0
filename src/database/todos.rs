use sqlx::PgPool;
use uuid::Uuid;

use super::models::todo::Todo;
use super::StoreError;

const TODO_COLUMNS: &str = "id, text, completed, completed_at, creator, created_at";

/// Persistence for todo records. Every read and write is qualified by the
/// creator id, so an ownership mismatch is indistinguishable from a missing
/// record — both come back empty.
pub struct TodoStore {
    pool: PgPool,
}

impl TodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new todo for the creator. New records always start
    /// uncompleted with a null timestamp.
    pub async fn create(&self, creator: Uuid, text: &str) -> Result<Todo, StoreError> {
        let sql =
            format!("INSERT INTO todos (text, creator) VALUES ($1, $2) RETURNING {TODO_COLUMNS}");
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(text)
            .bind(creator)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    /// All todos created by this user, store-native order.
    pub async fn list_for(&self, creator: Uuid) -> Result<Vec<Todo>, StoreError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE creator = $1");
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .bind(creator)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    pub async fn find_for(&self, creator: Uuid, id: Uuid) -> Result<Option<Todo>, StoreError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND creator = $2");
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(creator)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    /// Apply a patch to the creator's todo. `text = None` leaves the text
    /// unchanged; completion state is always written, since the patch rules
    /// resolve it unconditionally. Returns `None` when no matching record
    /// exists for this creator.
    pub async fn update_for(
        &self,
        creator: Uuid,
        id: Uuid,
        text: Option<&str>,
        completed: bool,
        completed_at: Option<i64>,
    ) -> Result<Option<Todo>, StoreError> {
        let sql = format!(
            "UPDATE todos SET text = COALESCE($3, text), completed = $4, completed_at = $5 \
             WHERE id = $1 AND creator = $2 RETURNING {TODO_COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(creator)
            .bind(text)
            .bind(completed)
            .bind(completed_at)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    /// Delete the creator's todo; `false` when nothing matched.
    pub async fn delete_for(&self, creator: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND creator = $2")
            .bind(id)
            .bind(creator)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
