//! Order - Transient order lines

use serde::{Deserialize, Serialize};

/// An (item, quantity) pair submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub order: String,
    pub quantity: i64,
}

impl OrderLineRequest {
    pub fn new(order: impl Into<String>, quantity: i64) -> Self {
        Self {
            order: order.into(),
            quantity,
        }
    }
}

/// An order line priced against the menu. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}
