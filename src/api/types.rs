//! API request and response types
//!
//! Serialized on the server side and deserialized by the coordinator's HTTP
//! strategy, so both derives are present.

use serde::{Deserialize, Serialize};

/// Request to run the assistant against one user message.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunAssistantRequest {
    #[serde(rename = "userMessage")]
    pub user_message: String,
}

/// Successful run response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunAssistantResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
