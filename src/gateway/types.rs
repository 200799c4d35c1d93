//! Gateway response types and error codes
//!
//! Success bodies are endpoint-specific; every failure renders the same
//! `{code, msg}` object so clients have one error shape to parse.

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = 1001)]
    pub code: i32,
    /// Human-readable message
    #[schema(example = "Invalid parameter")]
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const FORBIDDEN: i32 = 2003;

    // Resource errors (4xxx)
    pub const PRODUCT_NOT_FOUND: i32 = 4001;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse::new(error_codes::PRODUCT_NOT_FOUND, "Product not found: 42");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["code"], 4001);
        assert_eq!(json["msg"], "Product not found: 42");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
