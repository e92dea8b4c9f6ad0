use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::user::{SessionToken, User};
use super::StoreError;

const USER_COLUMNS: &str = "id, email, password, tokens, created_at";

/// Persistence for user records, including each user's ordered session-token
/// sequence (a JSONB array on the row).
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user with an empty token sequence. The database enforces
    /// email uniqueness; a violation surfaces as `DuplicateEmail`.
    pub async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let sql =
            format!("INSERT INTO users (email, password) VALUES ($1, $2) RETURNING {USER_COLUMNS}");

        match sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
        {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateEmail(email.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Append a token entry to the user's stored sequence, preserving
    /// insertion order.
    pub async fn append_token(
        &self,
        user_id: Uuid,
        entry: &SessionToken,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE users SET tokens = tokens || $2 WHERE id = $1")
            .bind(user_id)
            .bind(Json(entry))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Remove the exact matching token entry from the user's sequence.
    /// Removing an absent token is a no-op, not an error.
    pub async fn remove_token(&self, user_id: Uuid, token: &str) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE users SET tokens = COALESCE( \
                (SELECT jsonb_agg(entry) FROM jsonb_array_elements(tokens) AS entry \
                 WHERE entry->>'token' <> $2), \
                '[]'::jsonb) \
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
