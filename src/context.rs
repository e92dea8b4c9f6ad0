use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application context, constructed once at startup and handed to
/// every handler and middleware through axum state. Holds the only two
/// process-wide resources: the connection pool and the loaded configuration
/// (including the token signing secret).
#[derive(Clone)]
pub struct AppContext {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}
