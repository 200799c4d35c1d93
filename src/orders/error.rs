use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(i32),
}
