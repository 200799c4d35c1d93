//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the storefront API.
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::catalog::Product;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::ErrorResponse;
use crate::orders::handlers::CreateOrderRequest;
use crate::orders::models::{AdminOrderRow, NewOrderItem, Order, OrderLine, OrderStatus};
use crate::user_auth::service::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// JWT bearer authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT issued by /api/auth/register or /api/auth/login. \
                             Send as: Authorization: Bearer {token}",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "A small e-commerce backend: user auth, product catalog, and atomic order placement.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::catalog::handlers::list_products,
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        crate::orders::handlers::create_order,
        crate::orders::handlers::list_my_orders,
        crate::orders::handlers::list_all_orders,
        crate::orders::handlers::get_order,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            Product,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            CreateOrderRequest,
            NewOrderItem,
            Order,
            OrderLine,
            AdminOrderRow,
            OrderStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Catalog", description = "Public product listing"),
        (name = "Orders", description = "Order placement and queries (JWT required)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Storefront API");
        assert_eq!(spec.info.version, "0.1.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        let json_str = json.unwrap();
        assert!(json_str.contains("Storefront API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/health"));
        assert!(paths.paths.contains_key("/api/products"));
        assert!(paths.paths.contains_key("/api/auth/register"));
        assert!(paths.paths.contains_key("/api/auth/login"));
        assert!(paths.paths.contains_key("/api/orders"));
        assert!(paths.paths.contains_key("/api/orders/all"));
        assert!(paths.paths.contains_key("/api/orders/{id}"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
