//! HTTP gateway: routing, shared state, and the JSON API surface

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::account::Database;
use crate::user_auth::basic_auth_middleware;
use state::AppState;

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // Everything past registration and health requires Basic credentials.
    let protected_routes = Router::new()
        .route("/api/v1/user/me", get(crate::user_auth::handlers::me))
        .route("/api/v1/balance", get(handlers::get_balance))
        .route("/api/v1/balance/deposit", post(handlers::deposit))
        .route("/api/v1/balance/withdraw", post(handlers::withdraw))
        .route(
            "/api/v1/transfers",
            post(handlers::create_transfer).get(handlers::list_transfers),
        )
        .route("/api/v1/transfers/{transfer_id}", get(handlers::get_transfer))
        .layer(from_fn_with_state(state.clone(), basic_auth_middleware));

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route(
            "/api/v1/auth/register",
            post(crate::user_auth::handlers::register),
        )
        .merge(protected_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, db: Arc<Database>) {
    let state = Arc::new(AppState::new(db));
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
