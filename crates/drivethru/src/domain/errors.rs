//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A lookup by name missed the menu table
    #[error("Item '{name}' not found in menu.")]
    ItemNotFound { name: String },

    /// An order line named nothing on the menu
    #[error("No valid items found in order.")]
    NoValidItems,

    /// The realtime provider answered with a non-success status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn item_not_found<T: AsRef<str>>(name: T) -> Self {
        Self::ItemNotFound {
            name: name.as_ref().to_string(),
        }
    }

    pub fn upstream<T: Into<String>>(status: u16, message: T) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// True for failures the caller can fix by picking another menu item
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. } | Self::NoValidItems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_not_found_message() {
        let err = DomainError::item_not_found("pizza");
        assert_eq!(err.to_string(), "Item 'pizza' not found in menu.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_no_valid_items_message() {
        assert_eq!(
            DomainError::NoValidItems.to_string(),
            "No valid items found in order."
        );
    }

    #[test]
    fn test_upstream_displays_message_only() {
        let err = DomainError::upstream(401, "HTTP status client error (401 Unauthorized)");
        assert_eq!(err.to_string(), "HTTP status client error (401 Unauthorized)");
        assert!(!err.is_validation());
    }
}
