//! Send-attempt orchestration
//!
//! All operations take the chat state explicitly and either commit a full
//! user+assistant message pair or roll the state back to where it was.
//! Sequence numbers always derive from the snapshot passed in, never from a
//! concurrently mutated live list.

use super::state::{ChatMessage, ChatState, Role};
use super::store::ConversationStore;
use super::strategy::{SendError, SendStrategy};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Result of a send attempt. Failures are already rolled back and logged by
/// the time this is returned; the caller only decides what to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Both messages appended, conversation created or touched.
    Sent,
    /// State rolled back; the input field holds the original text again.
    Failed,
    /// Rejected because another send is in flight.
    Busy,
    /// Nothing to do (e.g. edit without an active conversation).
    Ignored,
}

pub struct ChatCoordinator {
    store: Arc<dyn ConversationStore>,
    assistant_strategy: Arc<dyn SendStrategy>,
    fallback_strategy: Arc<dyn SendStrategy>,
    /// Sentinel assistant id that selects the assistant-run strategy.
    assistant_run_id: String,
    /// Single-in-flight guard. A second send while one is running is
    /// rejected rather than queued, so every sequence-number snapshot stays
    /// valid at commit time.
    in_flight: Mutex<()>,
}

impl ChatCoordinator {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        assistant_strategy: Arc<dyn SendStrategy>,
        fallback_strategy: Arc<dyn SendStrategy>,
        assistant_run_id: impl Into<String>,
    ) -> Self {
        Self {
            store,
            assistant_strategy,
            fallback_strategy,
            assistant_run_id: assistant_run_id.into(),
            in_flight: Mutex::new(()),
        }
    }

    /// Send one user message against a snapshot of the message history.
    ///
    /// `text` is not validated here; an empty string is permitted by design
    /// and left to the caller.
    pub async fn send_message(
        &self,
        state: &mut ChatState,
        text: &str,
        current_messages: Vec<ChatMessage>,
        is_regeneration: bool,
    ) -> SendOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::warn!("Send rejected: another send is in flight");
            return SendOutcome::Busy;
        };

        let starting_input = text.to_string();
        state.input.clear();
        state.generating = true;
        state.prompt_picker_open = false;
        state.file_picker_open = false;

        match self.run_send(state, text, &current_messages).await {
            Ok(()) => {
                state.generating = false;
                state.first_token_received = false;
                SendOutcome::Sent
            }
            Err(e) => {
                // Strict rollback: the message list was never touched, so
                // restoring the flags and input reverts everything.
                state.generating = false;
                state.first_token_received = false;
                state.input = starting_input;
                tracing::error!(
                    error = %e,
                    regeneration = is_regeneration,
                    "Send failed, state rolled back"
                );
                SendOutcome::Failed
            }
        }
    }

    async fn run_send(
        &self,
        state: &mut ChatState,
        text: &str,
        current_messages: &[ChatMessage],
    ) -> Result<(), SendError> {
        let assistant = state.assistant.clone();
        let strategy = match &assistant {
            Some(a) if a.id == self.assistant_run_id => &self.assistant_strategy,
            _ => &self.fallback_strategy,
        };

        let reply = strategy.send(text).await?;

        let conversation = match &state.conversation {
            Some(existing) => self
                .store
                .touch_conversation(&existing.id)
                .await
                .map_err(SendError::Collaborator)?,
            None => self
                .store
                .create_conversation(text)
                .await
                .map_err(SendError::Collaborator)?,
        };

        let n = u32::try_from(current_messages.len()).unwrap_or(u32::MAX - 1);
        let now = Utc::now();

        let user_message = ChatMessage {
            id: Uuid::new_v4(),
            conversation_id: conversation.id.clone(),
            role: Role::User,
            content: text.to_string(),
            sequence_number: n,
            assistant_id: None,
            created_at: now,
        };
        let assistant_message = ChatMessage {
            id: Uuid::new_v4(),
            conversation_id: conversation.id.clone(),
            role: Role::Assistant,
            content: reply,
            sequence_number: n + 1,
            assistant_id: assistant.map(|a| a.id),
            created_at: now,
        };

        // Commit point: both messages land together or not at all.
        let mut messages = current_messages.to_vec();
        messages.push(user_message);
        messages.push(assistant_message);
        state.messages = messages;
        state.conversation = Some(conversation);
        Ok(())
    }

    /// Delete everything at and after `from_sequence_number`, then resend
    /// the edited text against the truncated history. The resulting list
    /// never contains a sequence-number gap or duplicate.
    pub async fn edit_and_resend(
        &self,
        state: &mut ChatState,
        edited_text: &str,
        from_sequence_number: u32,
    ) -> SendOutcome {
        let Some(conversation) = state.conversation.clone() else {
            return SendOutcome::Ignored;
        };

        if let Err(e) = self
            .store
            .delete_messages_from(&conversation.id, from_sequence_number)
            .await
        {
            tracing::error!(error = %e, "Failed to delete edited messages");
            return SendOutcome::Failed;
        }

        state
            .messages
            .retain(|m| m.sequence_number < from_sequence_number);
        let snapshot = state.messages.clone();

        self.send_message(state, edited_text, snapshot, false).await
    }

    /// Reset the surface for a fresh conversation and navigate to the
    /// workspace's root chat view. No-op without an active workspace.
    pub fn start_new_conversation(&self, state: &mut ChatState) {
        let Some(workspace) = &state.workspace else {
            return;
        };

        state.input.clear();
        state.messages.clear();
        state.conversation = None;
        state.generating = false;
        state.first_token_received = false;
        state.prompt_picker_open = false;
        state.file_picker_open = false;
        state.route = Some(format!("/{}/chat", workspace.id));
    }

    /// Accepted but currently has no cancellation effect.
    pub fn stop_generation(&self) {}
}
