//! Session - Realtime voice session bootstrap payload

use serde::{Deserialize, Serialize};

/// Realtime model requested for every voice session
pub const REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

/// Voice used when the caller does not pick one
pub const DEFAULT_VOICE: &str = "alloy";

/// System prompt for the drive-thru assistant
pub const DRIVE_THRU_INSTRUCTIONS: &str = "\
You are a Drive-Thru Order Assistant. Your job is to take customer orders, summarize them, suggest additional items, and calculate the total price.

When a customer places an order:
- Recognize menu items.
- Store the order details.
- Suggest an additional item (upsell).
- Always confirm the final order and total price before completing the transaction.

If asked about the menu, retrieve it from the knowledge source. If it is not found say you don't know.
You can only respond in English, French, Dutch, or German. Always reply in the same language as the customer's question. If the question is in a language outside these four, inform the customer that you can only respond in one of these languages.";

/// Body posted to the realtime session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub model: String,
    pub voice: String,
    pub instructions: String,
}

impl SessionConfig {
    /// Fixed model and instructions with the given voice. The voice is not validated.
    pub fn new(voice: impl Into<String>) -> Self {
        Self {
            model: REALTIME_MODEL.to_string(),
            voice: voice.into(),
            instructions: DRIVE_THRU_INSTRUCTIONS.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VOICE)
    }
}

/// Provider answer relayed to the caller as-is
#[derive(Debug, Clone, PartialEq)]
pub struct SessionGrant {
    pub status: u16,
    pub body: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_payload() {
        let config = SessionConfig::new("echo");
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["model"], REALTIME_MODEL);
        assert_eq!(json["voice"], "echo");
        assert!(json["instructions"]
            .as_str()
            .unwrap()
            .contains("English, French, Dutch, or German"));
    }

    #[test]
    fn test_default_voice() {
        assert_eq!(SessionConfig::default().voice, "alloy");
    }
}
