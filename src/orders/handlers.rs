//! Order HTTP handlers
//!
//! All routes here sit behind the JWT middleware; the admin listing
//! additionally requires the admin role.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa::ToSchema;

use super::error::OrderError;
use super::models::{AdminOrderRow, NewOrderItem, Order, OrderLine};
use crate::gateway::state::AppState;
use crate::gateway::types::{ErrorResponse, error_codes};
use crate::user_auth::Claims;

/// Order creation request body
#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub items: Vec<NewOrderItem>,
}

fn error_response(e: OrderError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        OrderError::ProductNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                error_codes::PRODUCT_NOT_FOUND,
                e.to_string(),
            )),
        ),
        OrderError::EmptyOrder | OrderError::InvalidQuantity(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                error_codes::INVALID_PARAMETER,
                e.to_string(),
            )),
        ),
        OrderError::Database(err) => {
            tracing::error!("Order storage failure: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "Order storage failure",
                )),
            )
        }
    }
}

/// Create an order
///
/// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Empty item list or non-positive quantity", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "A referenced product does not exist", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), (StatusCode, Json<ErrorResponse>)> {
    let user_id = claims.sub.parse::<i64>().unwrap_or_default();

    match state.orders.create_order(user_id, &req.items).await {
        Ok(order) => Ok((StatusCode::CREATED, Json(order))),
        Err(e) => Err(error_response(e)),
    }
}

/// List the caller's orders
///
/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "The caller's order headers, most recent first", body = Vec<Order>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_my_orders(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<(StatusCode, Json<Vec<Order>>), (StatusCode, Json<ErrorResponse>)> {
    let user_id = claims.sub.parse::<i64>().unwrap_or_default();

    match state.orders.find_orders_by_user_id(user_id).await {
        Ok(orders) => Ok((StatusCode::OK, Json(orders))),
        Err(e) => Err(error_response(e)),
    }
}

/// List every order with submitter email (admin only)
///
/// GET /api/orders/all
#[utoipa::path(
    get,
    path = "/api/orders/all",
    responses(
        (status = 200, description = "All orders with submitter email", body = Vec<AdminOrderRow>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_all_orders(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<AdminOrderRow>>), (StatusCode, Json<ErrorResponse>)> {
    match state.orders.find_all_orders().await {
        Ok(orders) => Ok((StatusCode::OK, Json(orders))),
        Err(e) => Err(error_response(e)),
    }
}

/// Fetch one order as its line rows
///
/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Line rows for the order; empty when unknown", body = Vec<OrderLine>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> Result<(StatusCode, Json<Vec<OrderLine>>), (StatusCode, Json<ErrorResponse>)> {
    match state.orders.find_order_by_id(order_id).await {
        Ok(lines) => Ok((StatusCode::OK, Json(lines))),
        Err(e) => Err(error_response(e)),
    }
}
