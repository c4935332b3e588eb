//! Order - Request/Response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use drivethru::{OrderLine, OrderLineRequest};

/// Order line submitted to `/order` or `/order/remove`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OrderRequest {
    /// Menu item name (exact, case-sensitive)
    #[schema(example = "burger")]
    pub order: String,
    /// Any integer; not range-checked
    #[schema(example = 2)]
    pub quantity: i64,
}

impl From<OrderRequest> for OrderLineRequest {
    fn from(req: OrderRequest) -> Self {
        OrderLineRequest::new(req.order, req.quantity)
    }
}

/// Priced order line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLineResponse {
    #[schema(example = "burger")]
    pub name: String,
    #[schema(example = 2)]
    pub quantity: i64,
    /// Unit price
    #[schema(example = 5.99)]
    pub price: f64,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            name: line.name,
            quantity: line.quantity,
            price: line.price,
        }
    }
}
