use std::sync::Arc;

use todo_api_rust::app::app;
use todo_api_rust::config::AppConfig;
use todo_api_rust::context::AppContext;
use todo_api_rust::database;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, TODO_TOKEN_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Todo API in {:?} mode", config.environment);

    // Only the development preset ships a built-in secret
    if config.security.token_secret.is_empty() {
        panic!("TODO_TOKEN_SECRET must be set outside development");
    }

    let db = database::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));
    database::ensure_schema(&db)
        .await
        .unwrap_or_else(|e| panic!("failed to prepare schema: {}", e));

    let ctx = AppContext {
        db,
        config: Arc::new(config),
    };

    let bind_addr = format!("0.0.0.0:{}", ctx.config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Todo API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app(ctx)).await.expect("server");
}
