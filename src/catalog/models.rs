use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable product.
///
/// `price` serializes as a decimal string ("20.00") so clients never see
/// float rounding on money.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_price_serializes_as_string() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            price: Decimal::from_str("20.00").unwrap(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "20.00");
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Widget");
    }

    #[test]
    fn test_product_roundtrip_preserves_scale() {
        let json = r#"{"id":7,"name":"Cable","price":"5.50"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::from_str("5.50").unwrap());
        assert_eq!(serde_json::to_string(&product).unwrap(), json);
    }
}
