//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, MenuItemResponse, OrderLineResponse, OrderRequest};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        // Session endpoints
        super::session::get_session,
        // Order endpoints
        super::order::take_order,
        super::order::remove_order,
        // Menu endpoints
        super::menu::get_item_details,
    ),
    info(
        title = "Drive-Thru Ordering Gateway",
        version = "0.1.0",
        description = "Realtime voice session bootstrap and menu/order lookups for the drive-thru assistant.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Session", description = "Session - Ephemeral realtime voice sessions"),
        (name = "Order", description = "Order - Price order lines against the menu"),
        (name = "Menu", description = "Menu - Item price lookup"),
    ),
    components(
        schemas(
            HealthCheck,
            OrderRequest,
            OrderLineResponse,
            MenuItemResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/health", "/session", "/order", "/order/remove", "/menu/{item_name}"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
