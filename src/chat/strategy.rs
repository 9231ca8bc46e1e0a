//! Send strategies
//!
//! The coordinator dispatches each send to a strategy: the assistant-run
//! path when the active assistant matches the configured sentinel id, the
//! alternate hosted-chat path otherwise. A real hosted implementation can
//! replace the stub without touching the coordinator.

use crate::api::{ErrorResponse, RunAssistantRequest, RunAssistantResponse};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    /// The server call failed: network error or non-2xx response.
    #[error("delegation failed: {0}")]
    Delegation(String),

    /// A collaborator (conversation store) call failed.
    #[error("collaborator call failed: {0}")]
    Collaborator(String),

    /// A send is already in flight for this coordinator.
    #[error("a send is already in progress")]
    Busy,

    /// The selected strategy has no implementation.
    #[error("{0}")]
    Unsupported(&'static str),
}

/// Produces the assistant's reply for one user message.
#[async_trait]
pub trait SendStrategy: Send + Sync {
    async fn send(&self, text: &str) -> Result<String, SendError>;
}

#[async_trait]
impl<T: SendStrategy + ?Sized> SendStrategy for Arc<T> {
    async fn send(&self, text: &str) -> Result<String, SendError> {
        (**self).send(text).await
    }
}

/// Calls the run-assistant endpoint over HTTP.
pub struct HttpAssistantStrategy {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssistantStrategy {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/run-assistant", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl SendStrategy for HttpAssistantStrategy {
    async fn send(&self, text: &str) -> Result<String, SendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RunAssistantRequest {
                user_message: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| SendError::Delegation(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SendError::Delegation(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(SendError::Delegation(detail));
        }

        serde_json::from_str::<RunAssistantResponse>(&body)
            .map(|r| r.message)
            .map_err(|e| SendError::Delegation(format!("failed to parse response: {e}")))
    }
}

/// Placeholder for the non-assistant hosted chat path.
pub struct HostedChatStub;

#[async_trait]
impl SendStrategy for HostedChatStub {
    async fn send(&self, _text: &str) -> Result<String, SendError> {
        Err(SendError::Unsupported("hosted chat path is not implemented"))
    }
}
