//! HTTP Error Mapping
//!
//! Every failure leaves the gateway as an `ErrorResponse` JSON body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use drivethru::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller named something that is not on the menu (400)
    #[error("{0}")]
    Validation(String),

    /// Request could not be extracted (bad JSON body, undecodable path)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Provider refused the request; its status is passed through
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Anything else (500)
    #[error("{error}")]
    Internal {
        error: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn internal(error: impl Into<String>) -> Self {
        Self::Internal {
            error: error.into(),
            details: None,
        }
    }

    pub fn internal_with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Internal {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    /// Map a domain failure, using `context` to prefix unexpected errors
    pub fn from_domain(err: DomainError, context: &str) -> Self {
        if err.is_validation() {
            tracing::warn!("{}", err);
            return Self::Validation(err.to_string());
        }

        tracing::error!("{}: {}", context, err);
        Self::internal(format!("{context}: {err}"))
    }

    /// Map a failed session request
    pub fn from_session(err: DomainError) -> Self {
        match err {
            DomainError::Upstream { status, message } => match StatusCode::from_u16(status) {
                Ok(status) => Self::Upstream { status, message },
                Err(_) => {
                    tracing::error!(
                        "Provider answered with invalid status {}: {}",
                        status,
                        message
                    );
                    Self::internal_with_details("Internal Server Error", message)
                }
            },
            other => {
                tracing::error!("Session request failed: {}", other);
                Self::internal_with_details("Internal Server Error", other.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } | Self::Upstream { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(error)
            | Self::Rejected { message: error, .. }
            | Self::Upstream { message: error, .. } => ErrorResponse {
                error,
                details: None,
            },
            Self::Internal { error, details } => ErrorResponse { error, details },
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected request path: {}", rejection.body_text());
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from_domain(DomainError::NoValidItems, "Could not process order");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No valid items found in order.");
    }

    #[test]
    fn test_unexpected_domain_error_is_prefixed() {
        let err = ApiError::from_domain(
            DomainError::ExternalService("boom".to_string()),
            "Could not remove order",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Could not remove order: External service error: boom"
        );
    }

    #[test]
    fn test_upstream_status_passthrough() {
        let err = ApiError::from_session(DomainError::upstream(429, "slow down"));
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_out_of_range_upstream_status_is_internal() {
        let err = ApiError::from_session(DomainError::upstream(1000, "weird"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_transport_failure_is_internal_with_details() {
        let err = ApiError::from_session(DomainError::ExternalService("refused".to_string()));
        match err {
            ApiError::Internal { error, details } => {
                assert_eq!(error, "Internal Server Error");
                assert_eq!(details.as_deref(), Some("External service error: refused"));
            }
            other => panic!("expected internal error, got {other:?}"),
        }
    }
}
