//! Conversation persistence seam
//!
//! Implemented elsewhere (database layer, sync service); the coordinator
//! only needs these three operations.

use super::state::Conversation;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Create a conversation, named after the first message.
    async fn create_conversation(&self, name: &str) -> Result<Conversation, String>;

    /// Bump the conversation's update timestamp and return the fresh row.
    async fn touch_conversation(&self, id: &str) -> Result<Conversation, String>;

    /// Delete all persisted messages with `sequence_number >= from` in the
    /// given conversation.
    async fn delete_messages_from(&self, conversation_id: &str, from: u32) -> Result<(), String>;
}

#[async_trait]
impl<T: ConversationStore + ?Sized> ConversationStore for Arc<T> {
    async fn create_conversation(&self, name: &str) -> Result<Conversation, String> {
        (**self).create_conversation(name).await
    }

    async fn touch_conversation(&self, id: &str) -> Result<Conversation, String> {
        (**self).touch_conversation(id).await
    }

    async fn delete_messages_from(&self, conversation_id: &str, from: u32) -> Result<(), String> {
        (**self).delete_messages_from(conversation_id, from).await
    }
}
