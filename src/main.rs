//! Storefront - a small e-commerce backend
//!
//! Startup order: config, logging, database pool, schema bootstrap,
//! optional demo catalog seed, then the HTTP gateway.

use std::sync::Arc;

use anyhow::Context;

use storefront::config::AppConfig;
use storefront::db::{Database, schema};
use storefront::gateway::{run_server, state::AppState};
use storefront::orders::OrderService;
use storefront::user_auth::UserAuthService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = storefront::logging::init_logging(&app_config);

    tracing::info!("Starting storefront in {} mode", env);

    let db = Arc::new(
        Database::connect(&app_config.database)
            .await
            .context("Failed to connect to PostgreSQL")?,
    );

    schema::init_schema(db.pool()).await?;
    if app_config.seed_demo_data {
        schema::seed_demo_products(db.pool()).await?;
    }

    let user_auth = Arc::new(UserAuthService::new(
        db.pool().clone(),
        app_config.auth.jwt_secret.clone(),
        app_config.auth.token_ttl_hours,
    ));
    let orders = Arc::new(OrderService::new(db.pool().clone()));
    let state = Arc::new(AppState::new(db, user_auth, orders));

    println!("🛒 Storefront starting in {} mode", env);
    run_server(&app_config.gateway, state).await;

    Ok(())
}
