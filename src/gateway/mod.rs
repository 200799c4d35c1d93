pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::user_auth::middleware::{jwt_auth_middleware, require_admin};
use state::AppState;

/// Build the complete router
///
/// Public so integration tests can serve the real thing on an ephemeral
/// port. Routes use full paths; `/api/orders/all` stays a static segment
/// that wins over the `{id}` capture.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/products", get(crate::catalog::handlers::list_products))
        .route("/api/auth/register", post(crate::user_auth::handlers::register))
        .route("/api/auth/login", post(crate::user_auth::handlers::login));

    // Order routes - protected by JWT
    let order_routes = Router::new()
        .route(
            "/api/orders",
            post(crate::orders::handlers::create_order).get(crate::orders::handlers::list_my_orders),
        )
        .route("/api/orders/{id}", get(crate::orders::handlers::get_order))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // Admin routes - JWT plus admin role
    let admin_routes = Router::new()
        .route("/api/orders/all", get(crate::orders::handlers::list_all_orders))
        .layer(from_fn(require_admin))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(order_routes)
        .merge(admin_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.port, config.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
