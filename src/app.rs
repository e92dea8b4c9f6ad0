use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::context::AppContext;
use crate::database;
use crate::handlers::{todos, users};
use crate::middleware::auth::require_auth;

/// Assemble the full application router around the shared context.
pub fn app(ctx: AppContext) -> Router {
    let enable_cors = ctx.config.security.enable_cors;

    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(protected_routes(ctx.clone()))
        .with_state(ctx);

    // Global middleware
    let router = if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

/// Routes reachable without a session token.
fn public_routes() -> Router<AppContext> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/login", post(users::login))
}

/// Routes behind the authentication gate.
fn protected_routes(ctx: AppContext) -> Router<AppContext> {
    Router::new()
        .route("/todos", post(todos::todo_create).get(todos::todo_list))
        .route(
            "/todos/:id",
            get(todos::todo_show)
                .patch(todos::todo_update)
                .delete(todos::todo_delete),
        )
        .route("/users/me", get(users::whoami))
        .route("/users/me/token", delete(users::logout))
        .route_layer(middleware::from_fn_with_state(ctx, require_auth))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Todo API (Rust)",
        "version": version,
        "endpoints": {
            "users": "POST /users, POST /users/login (public)",
            "session": "GET /users/me, DELETE /users/me/token (protected)",
            "todos": "/todos[/:id] (protected)",
        }
    }))
}

/// GET /health - liveness plus a database ping.
async fn health(State(ctx): State<AppContext>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match database::health_check(&ctx.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
