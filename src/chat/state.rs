//! Coordinator state and message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation.
///
/// `sequence_number` is unique within a conversation and strictly
/// increasing per appended message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub conversation_id: String,
    pub role: Role,
    pub content: String,
    pub sequence_number: u32,
    pub assistant_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Conversation reference. Owned elsewhere; the coordinator only reads the
/// id and touches the update timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub id: String,
}

/// An assistant the user can address. The configured sentinel id selects
/// the assistant-run strategy over the alternate path.
#[derive(Debug, Clone)]
pub struct Assistant {
    pub id: String,
    pub name: String,
}

/// In-memory state of the chat surface, passed explicitly into every
/// coordinator operation.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub input: String,
    pub messages: Vec<ChatMessage>,
    pub conversation: Option<Conversation>,
    pub workspace: Option<Workspace>,
    pub assistant: Option<Assistant>,
    pub generating: bool,
    pub first_token_received: bool,
    pub prompt_picker_open: bool,
    pub file_picker_open: bool,
    /// Navigation target set by `start_new_conversation`.
    pub route: Option<String>,
}
