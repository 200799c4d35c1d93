//! Catalog HTTP handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use super::models::Product;
use super::repository::ProductRepository;
use crate::gateway::state::AppState;
use crate::gateway::types::{ErrorResponse, error_codes};

/// List all products
///
/// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Full product catalog", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<Product>>), (StatusCode, Json<ErrorResponse>)> {
    match ProductRepository::list_all(state.db.pool()).await {
        Ok(products) => Ok((StatusCode::OK, Json(products))),
        Err(e) => {
            tracing::error!("Failed to list products: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "Failed to list products",
                )),
            ))
        }
    }
}
