//! Order placement and queries
//!
//! The one piece with real logic: totals are computed from catalog prices at
//! order time, and the header plus all line items land in a single
//! transaction or not at all.

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::OrderError;
pub use models::{AdminOrderRow, NewOrderItem, Order, OrderLine, OrderStatus};
pub use service::OrderService;
