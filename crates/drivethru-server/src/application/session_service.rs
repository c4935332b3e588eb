//! Session Application Service (Use Case)
//!
//! Builds the realtime session payload and hands it to the provider.

use std::sync::Arc;

use drivethru::{DomainError, RealtimeSessionProvider, SessionConfig, SessionGrant};

/// Application service for realtime session bootstrap
pub struct SessionService {
    provider: Arc<dyn RealtimeSessionProvider>,
}

impl SessionService {
    pub fn new(provider: Arc<dyn RealtimeSessionProvider>) -> Self {
        Self { provider }
    }

    /// Request a session for `voice` with the fixed model and instructions
    pub async fn bootstrap(&self, voice: &str) -> Result<SessionGrant, DomainError> {
        let config = SessionConfig::new(voice);
        let grant = self.provider.create_session(&config).await?;

        tracing::info!(
            "Realtime session created (voice: {}, status: {})",
            config.voice,
            grant.status
        );

        Ok(grant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the configs it receives
    #[derive(Default)]
    struct RecordingProvider {
        seen: Mutex<Vec<SessionConfig>>,
    }

    #[async_trait]
    impl RealtimeSessionProvider for RecordingProvider {
        async fn create_session(
            &self,
            config: &SessionConfig,
        ) -> Result<SessionGrant, DomainError> {
            self.seen.lock().unwrap().push(config.clone());
            Ok(SessionGrant {
                status: 200,
                body: serde_json::json!({"voice": config.voice}),
            })
        }
    }

    #[tokio::test]
    async fn test_bootstrap_passes_voice_unvalidated() {
        let provider = Arc::new(RecordingProvider::default());
        let service = SessionService::new(provider.clone());

        let grant = service.bootstrap("not-a-real-voice").await.unwrap();

        assert_eq!(grant.body["voice"], "not-a-real-voice");
        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], SessionConfig::new("not-a-real-voice"));
    }
}
