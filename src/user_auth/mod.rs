//! User registration, login, and JWT verification

pub mod handlers;
pub mod middleware;
pub mod service;

pub use service::{Claims, UserAuthService};
