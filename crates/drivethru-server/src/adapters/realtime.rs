//! HTTP Realtime Session Provider
//!
//! Requests ephemeral voice sessions from the realtime API using reqwest.

use async_trait::async_trait;
use reqwest::Client;

use drivethru::{DomainError, RealtimeSessionProvider, SessionConfig, SessionGrant};

/// reqwest implementation of RealtimeSessionProvider
pub struct HttpRealtimeSessionProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpRealtimeSessionProvider {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl RealtimeSessionProvider for HttpRealtimeSessionProvider {
    async fn create_session(&self, config: &SessionConfig) -> Result<SessionGrant, DomainError> {
        tracing::debug!(voice = %config.voice, "Requesting realtime session");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(config)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        // Dropping the response releases its connection
        if let Err(e) = response.error_for_status_ref() {
            let status = response.status().as_u16();
            tracing::error!("HTTP error occurred: {}", status);
            return Err(DomainError::upstream(status, e.to_string()));
        }

        let status = response.status().as_u16();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid provider response: {e}")))?;

        Ok(SessionGrant { status, body })
    }
}
