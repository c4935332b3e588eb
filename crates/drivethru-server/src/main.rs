use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod extract;
mod models;
mod routes;

use adapters::HttpRealtimeSessionProvider;
use application::{OrderService, SessionService};
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
    pub session_service: Arc<SessionService>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Gateway is running", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Drive-thru gateway is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router around `state`
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::session::router())
        .merge(routes::order::router())
        .merge(routes::menu::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drivethru_server=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file wins over the inherited environment
    let dotenv = dotenvy::dotenv_override();
    init_tracing();

    if let Err(e) = &dotenv {
        tracing::debug!("No .env file loaded: {}", e);
    }

    tracing::info!("🍔 Drive-thru gateway initializing...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            return Err(e).context("Gateway configuration is incomplete");
        }
    };

    let provider = Arc::new(HttpRealtimeSessionProvider::new(
        config.realtime_session_url.clone(),
        config.api_key.clone(),
    ));
    tracing::info!("🎙️  Realtime session provider: {}", config.realtime_session_url);

    let state = AppState {
        order_service: Arc::new(OrderService::default()),
        session_service: Arc::new(SessionService::new(provider)),
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Drive-thru gateway listening on {}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
