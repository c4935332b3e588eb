//! Error - JSON error envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every non-success status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
