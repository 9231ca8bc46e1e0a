//! Run orchestration
//!
//! The strict sequential protocol: one thread per send, one run per thread,
//! polled until terminal, reply taken from the newest thread message. No
//! internal retries; any step failure aborts the run.

use super::types::RunStatus;
use super::{AssistantApi, AssistantService, RunError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Polling policy for the run loop.
#[derive(Debug, Clone, Copy)]
pub struct RunPolicy {
    /// Delay between status fetches.
    pub poll_interval: Duration,
    /// Overall deadline for the run to leave its pending statuses.
    pub run_timeout: Duration,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            run_timeout: Duration::from_secs(120),
        }
    }
}

pub struct AssistantRunner<A> {
    api: A,
    policy: RunPolicy,
}

impl<A: AssistantApi> AssistantRunner<A> {
    pub fn new(api: A, policy: RunPolicy) -> Self {
        Self { api, policy }
    }

    /// Execute the full protocol for one user message and return the reply
    /// text.
    pub async fn run(&self, user_message: &str) -> Result<String, RunError> {
        let deadline = Instant::now() + self.policy.run_timeout;

        let thread = self.api.create_thread().await?;
        tracing::debug!(thread_id = %thread.id, "Thread created");

        self.api.post_message(&thread.id, user_message).await?;

        let run = self.api.start_run(&thread.id).await?;
        tracing::debug!(thread_id = %thread.id, run_id = %run.id, "Run started");

        let mut status = run.status;
        while status.is_pending() {
            if Instant::now() >= deadline {
                return Err(RunError::Timeout(self.policy.run_timeout));
            }
            sleep(self.policy.poll_interval).await;
            status = self.api.run_status(&thread.id, &run.id).await?;
        }

        // The source contract fetches the reply for every terminal status,
        // not only `completed`. Keep that, but make the oddity visible.
        if status != RunStatus::Completed {
            tracing::warn!(
                thread_id = %thread.id,
                run_id = %run.id,
                ?status,
                "Run terminal but not completed; fetching reply anyway"
            );
        }

        let messages = self.api.list_messages(&thread.id).await?;
        let reply = messages
            .reply_text()
            .ok_or_else(|| RunError::ReplyExtraction("thread has no text reply".to_string()))?;

        tracing::info!(thread_id = %thread.id, run_id = %run.id, reply_len = reply.len(), "Run finished");
        Ok(reply.to_string())
    }
}

#[async_trait]
impl<A: AssistantApi> AssistantService for AssistantRunner<A> {
    async fn generate_reply(&self, user_message: &str) -> Result<String, RunError> {
        self.run(user_message).await
    }
}
