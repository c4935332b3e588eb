//! Realtime Session Provider Port
//!
//! Abstract interface for requesting ephemeral realtime voice sessions.

use async_trait::async_trait;

use crate::domain::entities::{SessionConfig, SessionGrant};
use crate::domain::errors::DomainError;

/// Service interface for the external realtime session provider
#[async_trait]
pub trait RealtimeSessionProvider: Send + Sync {
    /// Request an ephemeral session for the given voice and prompt.
    ///
    /// A non-success answer from the provider is returned as
    /// `DomainError::Upstream` carrying the provider's status code.
    async fn create_session(&self, config: &SessionConfig) -> Result<SessionGrant, DomainError>;
}
