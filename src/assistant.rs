//! Assistant run client
//!
//! Drives the hosted assistants API protocol to a terminal state: create
//! thread, post message, start run, poll status, fetch reply.

mod error;
mod http;
mod runner;
mod types;

#[cfg(test)]
pub mod testing;

pub use error::RunError;
pub use http::OpenAiAssistantApi;
pub use runner::{AssistantRunner, RunPolicy};
pub use types::{MessageContentBlock, MessageList, RunHandle, RunStatus, TextContent, ThreadHandle, ThreadMessage};

use async_trait::async_trait;
use std::sync::Arc;

/// Low-level access to the external assistants API, one method per protocol
/// step so the run orchestration can be tested against scripted doubles.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Request a new conversation thread.
    async fn create_thread(&self) -> Result<ThreadHandle, RunError>;

    /// Attach the user's text as a "user" role message to the thread.
    async fn post_message(&self, thread_id: &str, text: &str) -> Result<(), RunError>;

    /// Request execution of the configured assistant against the thread.
    async fn start_run(&self, thread_id: &str) -> Result<RunHandle, RunError>;

    /// Fetch the current status of a run.
    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, RunError>;

    /// List the thread's messages, newest first.
    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, RunError>;
}

/// High-level seam consumed by the HTTP layer: one user message in, the
/// assistant's reply text out.
#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn generate_reply(&self, user_message: &str) -> Result<String, RunError>;
}

#[async_trait]
impl<T: AssistantApi + ?Sized> AssistantApi for Arc<T> {
    async fn create_thread(&self) -> Result<ThreadHandle, RunError> {
        (**self).create_thread().await
    }

    async fn post_message(&self, thread_id: &str, text: &str) -> Result<(), RunError> {
        (**self).post_message(thread_id, text).await
    }

    async fn start_run(&self, thread_id: &str) -> Result<RunHandle, RunError> {
        (**self).start_run(thread_id).await
    }

    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, RunError> {
        (**self).run_status(thread_id, run_id).await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, RunError> {
        (**self).list_messages(thread_id).await
    }
}
