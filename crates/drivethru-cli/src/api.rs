//! Drive-Thru Gateway API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for the ordering gateway
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct OrderRequest<'a> {
    pub order: &'a str,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

impl GatewayClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Request a realtime session; returns the provider JSON untouched
    pub async fn session(&self, voice: &str) -> Result<serde_json::Value> {
        let url = format!("{}/session", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("voice", voice)])
            .send()
            .await
            .context("Failed to connect to gateway")?;

        let resp = check(resp).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Look up a menu item
    pub async fn menu_item(&self, name: &str) -> Result<MenuItem> {
        let url = format!("{}/menu/{}", self.base_url, urlencoding::encode(name));
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to gateway")?;

        let resp = check(resp).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Add an order line
    pub async fn take_order(&self, item: &str, quantity: i64) -> Result<OrderLine> {
        self.post_order("order", item, quantity).await
    }

    /// Remove an order line
    pub async fn remove_order(&self, item: &str, quantity: i64) -> Result<OrderLine> {
        self.post_order("order/remove", item, quantity).await
    }

    async fn post_order(&self, path: &str, item: &str, quantity: i64) -> Result<OrderLine> {
        let url = format!("{}/{}", self.base_url, path);
        let request = OrderRequest {
            order: item,
            quantity,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to gateway")?;

        let resp = check(resp).await?;
        resp.json().await.context("Failed to parse response")
    }
}

/// Turn a non-success response into an error carrying the gateway's message
async fn check(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    let body = resp
        .text()
        .await
        .with_context(|| format!("API error ({}): failed to read response body", status))?;

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error,
            details: Some(details),
        }) => bail!("API error ({}): {} ({})", status, error, details),
        Ok(ErrorBody { error, .. }) => bail!("API error ({}): {}", status, error),
        Err(_) => bail!("API error ({}): {}", status, body),
    }
}
