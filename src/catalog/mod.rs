//! Product catalog
//!
//! Read-mostly catalog backing the storefront. Orders snapshot prices from
//! here at purchase time; later catalog edits never touch past orders.

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::Product;
pub use repository::ProductRepository;
