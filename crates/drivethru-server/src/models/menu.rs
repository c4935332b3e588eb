//! Menu - Item lookup DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use drivethru::MenuItem;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    #[schema(example = "fries")]
    pub name: String,
    #[schema(example = 2.99)]
    pub price: f64,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.to_string(),
            price: item.price,
        }
    }
}
