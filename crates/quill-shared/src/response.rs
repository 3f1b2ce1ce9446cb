//! Error response bodies.

use serde::{Deserialize, Serialize};

/// One rejected input field, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDetail {
    pub field: String,
    pub message: String,
}

/// Body of every error response.
///
/// Validation failures carry `details`; every other failure carries `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldDetail>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            details: Vec::new(),
        }
    }

    pub fn validation(details: Vec<FieldDetail>) -> Self {
        Self {
            message: None,
            details,
        }
    }

    pub fn not_found() -> Self {
        Self::message("Resource not found")
    }
}
