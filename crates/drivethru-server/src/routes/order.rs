//! Order Routes - Add/remove order lines
//!
//! Both endpoints price the line against the menu and echo it back.
//! Neither keeps state between requests.

use axum::{extract::State, routing::post, Json, Router};

use drivethru::OrderLineRequest;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{ErrorResponse, OrderLineResponse, OrderRequest};
use crate::AppState;

/// Add an item to the order
#[utoipa::path(
    post,
    path = "/order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order line accepted", body = OrderLineResponse),
        (status = 400, description = "Item not on the menu", body = ErrorResponse),
        (status = 422, description = "Malformed order line", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Order"
)]
pub async fn take_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OrderRequest>,
) -> Result<Json<OrderLineResponse>, ApiError> {
    let request: OrderLineRequest = payload.into();
    let line = state
        .order_service
        .take_order(&request)
        .map_err(|e| ApiError::from_domain(e, "Could not process order"))?;

    Ok(Json(line.into()))
}

/// Remove an item from the order
#[utoipa::path(
    post,
    path = "/order/remove",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order line removed", body = OrderLineResponse),
        (status = 400, description = "Item not on the menu", body = ErrorResponse),
        (status = 422, description = "Malformed order line", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Order"
)]
pub async fn remove_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OrderRequest>,
) -> Result<Json<OrderLineResponse>, ApiError> {
    let request: OrderLineRequest = payload.into();
    let line = state
        .order_service
        .remove_order(&request)
        .map_err(|e| ApiError::from_domain(e, "Could not remove order"))?;

    Ok(Json(line.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", post(take_order))
        .route("/order/remove", post(remove_order))
}
