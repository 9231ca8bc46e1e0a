//! reqwest implementation of the assistants API
//!
//! Every request carries the bearer credential and the protocol-version
//! header. Any non-2xx status or transport failure maps to the error
//! variant of the step that issued the request.

use super::types::{MessageList, RunHandle, RunStatus, ThreadHandle};
use super::{AssistantApi, RunError};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Protocol-version header value required by the assistants API.
const BETA_HEADER: &str = "assistants=v2";

pub struct OpenAiAssistantApi {
    client: Client,
    api_key: String,
    assistant_id: String,
    base_url: String,
}

impl OpenAiAssistantApi {
    pub fn new(api_key: String, assistant_id: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            assistant_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", BETA_HEADER)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, String> {
        let body = Self::send_raw(request).await?;
        serde_json::from_str(&body).map_err(|e| format!("failed to parse response: {e}"))
    }

    /// Send and check the status only. Any 2xx body is accepted as-is.
    async fn send_unchecked(request: RequestBuilder) -> Result<(), String> {
        Self::send_raw(request).await.map(|_| ())
    }

    async fn send_raw(request: RequestBuilder) -> Result<String, String> {
        let response = request.send().await.map_err(describe_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("failed to read response: {e}"))?;

        if !status.is_success() {
            return Err(format!("HTTP {status}: {body}"));
        }

        Ok(body)
    }
}

fn describe_transport(e: reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timeout: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        format!("request failed: {e}")
    }
}

#[async_trait]
impl AssistantApi for OpenAiAssistantApi {
    async fn create_thread(&self) -> Result<ThreadHandle, RunError> {
        Self::send(self.request(Method::POST, "/threads").json(&json!({})))
            .await
            .map_err(RunError::ThreadCreation)
    }

    async fn post_message(&self, thread_id: &str, text: &str) -> Result<(), RunError> {
        Self::send_unchecked(
            self.request(Method::POST, &format!("/threads/{thread_id}/messages"))
                .json(&json!({ "role": "user", "content": text })),
        )
        .await
        .map_err(RunError::MessagePost)
    }

    async fn start_run(&self, thread_id: &str) -> Result<RunHandle, RunError> {
        Self::send(
            self.request(Method::POST, &format!("/threads/{thread_id}/runs"))
                .json(&json!({ "assistant_id": self.assistant_id })),
        )
        .await
        .map_err(RunError::RunStart)
    }

    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, RunError> {
        let run: RunHandle = Self::send(
            self.request(Method::GET, &format!("/threads/{thread_id}/runs/{run_id}")),
        )
        .await
        .map_err(RunError::StatusFetch)?;

        Ok(run.status)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, RunError> {
        Self::send(self.request(Method::GET, &format!("/threads/{thread_id}/messages")))
            .await
            .map_err(RunError::ReplyExtraction)
    }
}
