//! Mock collaborators for coordinator tests

use super::state::Conversation;
use super::store::ConversationStore;
use super::strategy::{SendError, SendStrategy};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

// ============================================================================
// Mock Send Strategy
// ============================================================================

/// Send strategy returning queued results, recording every send.
pub struct MockSendStrategy {
    results: Mutex<VecDeque<Result<String, SendError>>>,
    sends: Mutex<Vec<String>>,
}

impl MockSendStrategy {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            sends: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_reply(&self, text: &str) {
        self.results.lock().unwrap().push_back(Ok(text.to_string()));
    }

    pub fn queue_error(&self, error: SendError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_sends(&self) -> Vec<String> {
        self.sends.lock().unwrap().clone()
    }
}

impl Default for MockSendStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SendStrategy for MockSendStrategy {
    async fn send(&self, text: &str) -> Result<String, SendError> {
        self.sends.lock().unwrap().push(text.to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SendError::Delegation("no mock result queued".to_string())))
    }
}

// ============================================================================
// Delayed Mock Send Strategy (for overlap testing)
// ============================================================================

/// Mock strategy with a configurable delay, notifying when the send starts.
pub struct DelayedMockSendStrategy {
    inner: MockSendStrategy,
    delay: Duration,
    pub send_started: Arc<Notify>,
}

impl DelayedMockSendStrategy {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MockSendStrategy::new(),
            delay,
            send_started: Arc::new(Notify::new()),
        }
    }

    pub fn queue_reply(&self, text: &str) {
        self.inner.queue_reply(text);
    }
}

#[async_trait]
impl SendStrategy for DelayedMockSendStrategy {
    async fn send(&self, text: &str) -> Result<String, SendError> {
        // notify_one stores a permit, so a waiter that registers late still
        // observes the start.
        self.send_started.notify_one();
        tokio::time::sleep(self.delay).await;
        self.inner.send(text).await
    }
}

// ============================================================================
// In-Memory Conversation Store
// ============================================================================

/// In-memory store recording creations, touches, and deletions.
pub struct InMemoryConversationStore {
    next_id: AtomicU64,
    fail_next: AtomicBool,
    created: Mutex<Vec<String>>,
    touched: Mutex<Vec<String>>,
    deletions: Mutex<Vec<(String, u32)>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            fail_next: AtomicBool::new(false),
            created: Mutex::new(Vec::new()),
            touched: Mutex::new(Vec::new()),
            deletions: Mutex::new(Vec::new()),
        }
    }

    /// Make the next store call fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn created_ids(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn touched_ids(&self) -> Vec<String> {
        self.touched.lock().unwrap().clone()
    }

    pub fn deletions(&self) -> Vec<(String, u32)> {
        self.deletions.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), String> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err("injected store failure".to_string())
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create_conversation(&self, _name: &str) -> Result<Conversation, String> {
        self.check_failure()?;
        let id = format!("conv-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.created.lock().unwrap().push(id.clone());
        Ok(Conversation {
            id,
            updated_at: Utc::now(),
        })
    }

    async fn touch_conversation(&self, id: &str) -> Result<Conversation, String> {
        self.check_failure()?;
        self.touched.lock().unwrap().push(id.to_string());
        Ok(Conversation {
            id: id.to_string(),
            updated_at: Utc::now(),
        })
    }

    async fn delete_messages_from(&self, conversation_id: &str, from: u32) -> Result<(), String> {
        self.check_failure()?;
        self.deletions
            .lock()
            .unwrap()
            .push((conversation_id.to_string(), from));
        Ok(())
    }
}
