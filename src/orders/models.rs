//! Order types and query result rows

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle status, stored as lowercase text
///
/// Only `Pending` is produced at creation; the remaining states exist for
/// later lifecycle work and for tolerant reads of rows touched by other
/// tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Cancelled,
}

impl From<&str> for OrderStatus {
    fn from(v: &str) -> Self {
        match v {
            "paid" => OrderStatus::Paid,
            "shipped" => OrderStatus::Shipped,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

/// A requested line item (wire input for order creation)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewOrderItem {
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = 2)]
    pub quantity: i32,
}

/// Persisted order header
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    #[schema(value_type = String)]
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// One order with its submitter's email, for the admin listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminOrderRow {
    pub id: i64,
    #[schema(value_type = String)]
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub email: String,
}

/// One line of a single order detail view (header fields repeat per line)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderLine {
    pub id: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub product_name: String,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_roundtrip() {
        // Serialized form matches the stored TEXT, so serde out and
        // From<&str> back must agree for every variant
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Cancelled,
        ] {
            let json = serde_json::to_value(status).unwrap();
            let text = json.as_str().expect("serializes as a string");
            assert_eq!(OrderStatus::from(text), status);
        }
    }

    #[test]
    fn test_order_status_unknown_falls_back_to_pending() {
        assert_eq!(OrderStatus::from("refunded"), OrderStatus::Pending);
        assert_eq!(OrderStatus::from(""), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, r#""pending""#);
    }

    #[test]
    fn test_new_order_item_deserializes() {
        let item: NewOrderItem = serde_json::from_str(r#"{"product_id":3,"quantity":2}"#).unwrap();
        assert_eq!(item.product_id, 3);
        assert_eq!(item.quantity, 2);
    }
}
