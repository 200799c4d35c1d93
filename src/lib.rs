//! Storefront - a small e-commerce backend
//!
//! User registration/login with JWT, a product catalog, and atomic order
//! placement over PostgreSQL.
//!
//! # Modules
//!
//! - [`orders`] - Order placement (transactional) and queries
//! - [`catalog`] - Product model and repository
//! - [`user_auth`] - Registration, login, JWT middleware
//! - [`gateway`] - axum router, shared state, OpenAPI docs
//! - [`db`] - Connection pool and schema bootstrap
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - tracing setup with rolling file output

pub mod catalog;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod user_auth;

// Convenient re-exports at crate root
pub use catalog::{Product, ProductRepository};
pub use config::AppConfig;
pub use db::Database;
pub use gateway::{build_router, run_server, state::AppState};
pub use orders::{NewOrderItem, Order, OrderError, OrderService, OrderStatus};
pub use user_auth::UserAuthService;
