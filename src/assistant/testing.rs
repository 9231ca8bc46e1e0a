//! Scripted assistants API for testing the run orchestration
//!
//! Statuses are consumed in order by `start_run` and then `run_status`;
//! once the script runs out the default status is returned, so a test can
//! model both a converging run and one that never leaves pending.

use super::types::{MessageContentBlock, MessageList, RunHandle, RunStatus, TextContent, ThreadHandle, ThreadMessage};
use super::{AssistantApi, RunError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Protocol steps invoked on the scripted API, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    CreateThread,
    PostMessage { thread_id: String, text: String },
    StartRun { thread_id: String },
    RunStatus { thread_id: String, run_id: String },
    ListMessages { thread_id: String },
}

pub struct ScriptedAssistantApi {
    calls: Mutex<Vec<ApiCall>>,
    statuses: Mutex<VecDeque<Result<RunStatus, RunError>>>,
    default_status: RunStatus,
    create_thread_error: Mutex<Option<RunError>>,
    post_message_error: Mutex<Option<RunError>>,
    start_run_error: Mutex<Option<RunError>>,
    reply: Mutex<Option<Result<MessageList, RunError>>>,
}

impl ScriptedAssistantApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            statuses: Mutex::new(VecDeque::new()),
            default_status: RunStatus::Completed,
            create_thread_error: Mutex::new(None),
            post_message_error: Mutex::new(None),
            start_run_error: Mutex::new(None),
            reply: Mutex::new(Some(Ok(message_list("scripted reply")))),
        }
    }

    pub fn with_statuses(self, statuses: impl IntoIterator<Item = RunStatus>) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .extend(statuses.into_iter().map(Ok));
        self
    }

    /// Status returned once the scripted queue is exhausted.
    pub fn with_default_status(mut self, status: RunStatus) -> Self {
        self.default_status = status;
        self
    }

    pub fn queue_status_error(self, error: RunError) -> Self {
        self.statuses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_reply(self, text: &str) -> Self {
        *self.reply.lock().unwrap() = Some(Ok(message_list(text)));
        self
    }

    pub fn with_empty_thread(self) -> Self {
        *self.reply.lock().unwrap() = Some(Ok(MessageList::default()));
        self
    }

    pub fn fail_create_thread(self, error: RunError) -> Self {
        *self.create_thread_error.lock().unwrap() = Some(error);
        self
    }

    pub fn fail_post_message(self, error: RunError) -> Self {
        *self.post_message_error.lock().unwrap() = Some(error);
        self
    }

    pub fn fail_start_run(self, error: RunError) -> Self {
        *self.start_run_error.lock().unwrap() = Some(error);
        self
    }

    pub fn fail_list_messages(self, error: RunError) -> Self {
        *self.reply.lock().unwrap() = Some(Err(error));
        self
    }

    pub fn recorded_calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_status(&self) -> Result<RunStatus, RunError> {
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(self.default_status))
    }
}

impl Default for ScriptedAssistantApi {
    fn default() -> Self {
        Self::new()
    }
}

/// A message list holding a single text reply.
pub fn message_list(text: &str) -> MessageList {
    MessageList {
        data: vec![ThreadMessage {
            content: vec![MessageContentBlock::Text {
                text: TextContent {
                    value: text.to_string(),
                },
            }],
        }],
    }
}

#[async_trait]
impl AssistantApi for ScriptedAssistantApi {
    async fn create_thread(&self) -> Result<ThreadHandle, RunError> {
        self.calls.lock().unwrap().push(ApiCall::CreateThread);
        if let Some(error) = self.create_thread_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(ThreadHandle {
            id: "thread-1".to_string(),
        })
    }

    async fn post_message(&self, thread_id: &str, text: &str) -> Result<(), RunError> {
        self.calls.lock().unwrap().push(ApiCall::PostMessage {
            thread_id: thread_id.to_string(),
            text: text.to_string(),
        });
        if let Some(error) = self.post_message_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(())
    }

    async fn start_run(&self, thread_id: &str) -> Result<RunHandle, RunError> {
        self.calls.lock().unwrap().push(ApiCall::StartRun {
            thread_id: thread_id.to_string(),
        });
        if let Some(error) = self.start_run_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(RunHandle {
            id: "run-1".to_string(),
            status: self.next_status()?,
        })
    }

    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, RunError> {
        self.calls.lock().unwrap().push(ApiCall::RunStatus {
            thread_id: thread_id.to_string(),
            run_id: run_id.to_string(),
        });
        self.next_status()
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, RunError> {
        self.calls.lock().unwrap().push(ApiCall::ListMessages {
            thread_id: thread_id.to_string(),
        });
        self.reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(RunError::ReplyExtraction("no scripted reply".to_string())))
    }
}
