//! Menu Routes - Single item lookup

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiError;
use crate::extract::AppPath;
use crate::models::{ErrorResponse, MenuItemResponse};
use crate::AppState;

/// Get the price of a menu item
#[utoipa::path(
    get,
    path = "/menu/{item_name}",
    params(("item_name" = String, Path, description = "Menu item name (case-sensitive)")),
    responses(
        (status = 200, description = "Item found", body = MenuItemResponse),
        (status = 400, description = "Item not on the menu", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Menu"
)]
pub async fn get_item_details(
    State(state): State<AppState>,
    AppPath(item_name): AppPath<String>,
) -> Result<Json<MenuItemResponse>, ApiError> {
    let item = state
        .order_service
        .item_details(&item_name)
        .map_err(|e| ApiError::from_domain(e, "Could not fetch item details"))?;

    Ok(Json(item.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/menu/:item_name", get(get_item_details))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get, read_json, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_every_item_has_its_price() {
        let menu = [
            ("burger", 5.99),
            ("fries", 2.99),
            ("coke", 1.99),
            ("nuggets", 4.99),
        ];
        for (item, price) in menu {
            let response = get(test_app(), &format!("/menu/{item}")).await;

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(read_json(response).await, json!({"name": item, "price": price}));
        }
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let response = get(test_app(), "/menu/pizza").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Item 'pizza' not found in menu."})
        );
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let response = get(test_app(), "/menu/Fries").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_percent_encoded_name_is_decoded() {
        let response = get(test_app(), "/menu/ice%20cream").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Item 'ice cream' not found in menu."})
        );
    }

    #[tokio::test]
    async fn test_undecodable_path_returns_json_error() {
        let response = get(test_app(), "/menu/%FF").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(read_json(response).await["error"].is_string());
    }
}
