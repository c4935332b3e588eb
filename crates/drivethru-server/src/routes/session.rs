//! Session Routes - Realtime voice session bootstrap
//!
//! Proxies to the realtime session provider and relays its answer verbatim.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{ErrorResponse, SessionQuery};
use crate::AppState;

/// Create an ephemeral realtime session
#[utoipa::path(
    get,
    path = "/session",
    params(SessionQuery),
    responses(
        (status = 200, description = "Provider response, relayed unchanged"),
        (status = 401, description = "Provider rejected the request (any provider status is passed through)", body = ErrorResponse),
        (status = 500, description = "Provider unreachable or answered with invalid JSON", body = ErrorResponse)
    ),
    tag = "Session"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Response, ApiError> {
    let grant = state
        .session_service
        .bootstrap(&query.voice)
        .await
        .map_err(ApiError::from_session)?;

    let status = StatusCode::from_u16(grant.status).unwrap_or(StatusCode::OK);
    Ok((status, Json(grant.body)).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(get_session))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app_with_provider, get, read_json, StubProvider};
    use axum::http::StatusCode;
    use drivethru::DomainError;
    use serde_json::json;

    #[tokio::test]
    async fn test_session_relays_provider_body() {
        let provider = StubProvider::ok(200, json!({"client_secret": "x"}));
        let response = get(app_with_provider(provider.clone()), "/session?voice=alloy").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"client_secret": "x"}));
        assert_eq!(provider.voices(), vec!["alloy".to_string()]);
    }

    #[tokio::test]
    async fn test_session_defaults_to_alloy() {
        let provider = StubProvider::ok(200, json!({}));
        get(app_with_provider(provider.clone()), "/session").await;

        assert_eq!(provider.voices(), vec!["alloy".to_string()]);
    }

    #[tokio::test]
    async fn test_session_passes_through_provider_status() {
        let message =
            "HTTP status client error (401 Unauthorized) for url (http://provider/sessions)";
        let provider = StubProvider::err(DomainError::upstream(401, message));
        let response = get(app_with_provider(provider), "/session?voice=echo").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            read_json(response).await,
            json!({ "error": message })
        );
    }

    #[tokio::test]
    async fn test_session_transport_failure_is_500() {
        let provider = StubProvider::err(DomainError::ExternalService("connection refused".into()));
        let response = get(app_with_provider(provider), "/session").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            read_json(response).await,
            json!({
                "error": "Internal Server Error",
                "details": "External service error: connection refused"
            })
        );
    }
}
