//! Shared helpers for route tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use tower::ServiceExt;

use drivethru::{DomainError, RealtimeSessionProvider, SessionConfig, SessionGrant};

use crate::application::{OrderService, SessionService};
use crate::AppState;

/// Canned provider that remembers the voices it was asked for
#[derive(Clone)]
pub struct StubProvider {
    result: Result<SessionGrant, DomainError>,
    voices: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    pub fn ok(status: u16, body: serde_json::Value) -> Self {
        Self {
            result: Ok(SessionGrant { status, body }),
            voices: Arc::default(),
        }
    }

    pub fn err(error: DomainError) -> Self {
        Self {
            result: Err(error),
            voices: Arc::default(),
        }
    }

    pub fn voices(&self) -> Vec<String> {
        self.voices.lock().unwrap().clone()
    }
}

#[async_trait]
impl RealtimeSessionProvider for StubProvider {
    async fn create_session(&self, config: &SessionConfig) -> Result<SessionGrant, DomainError> {
        self.voices.lock().unwrap().push(config.voice.clone());
        self.result.clone()
    }
}

pub fn app_with_provider(provider: StubProvider) -> Router {
    crate::app(AppState {
        order_service: Arc::new(OrderService::default()),
        session_service: Arc::new(SessionService::new(Arc::new(provider))),
    })
}

pub fn test_app() -> Router {
    app_with_provider(StubProvider::ok(200, serde_json::json!({})))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
