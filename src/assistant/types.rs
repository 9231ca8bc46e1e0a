//! Wire types for the external assistants API
//!
//! The JSON shapes are the external service's contract and are treated as
//! fixed. Only the fields this client consumes are modeled.

use serde::Deserialize;

/// `POST /threads` response.
#[derive(Debug, Deserialize)]
pub struct ThreadHandle {
    pub id: String,
}

/// `POST /threads/{id}/runs` and `GET .../runs/{run_id}` response.
#[derive(Debug, Deserialize)]
pub struct RunHandle {
    pub id: String,
    pub status: RunStatus,
}

/// Run lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    Expired,
    /// Statuses this client does not track (e.g. `requires_action`).
    Other,
}

impl RunStatus {
    /// True while the run has not reached a terminal state. Everything that
    /// is not `queued` or `in_progress` terminates polling.
    pub fn is_pending(self) -> bool {
        matches!(self, RunStatus::Queued | RunStatus::InProgress)
    }

    fn from_wire(raw: &str) -> Self {
        match raw {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            "expired" => Self::Expired,
            _ => Self::Other,
        }
    }
}

impl<'de> serde::Deserialize<'de> for RunStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RunStatus::from_wire(&raw))
    }
}

/// `GET /threads/{id}/messages` response, newest message first.
#[derive(Debug, Default, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub data: Vec<ThreadMessage>,
}

impl MessageList {
    /// The reply slot: the first message's first content block, which must
    /// be a text block. `None` for an empty thread or a non-text block.
    pub fn reply_text(&self) -> Option<&str> {
        match self.data.first()?.content.first()? {
            MessageContentBlock::Text { text } => Some(text.value.as_str()),
            MessageContentBlock::Other => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ThreadMessage {
    #[serde(default)]
    pub content: Vec<MessageContentBlock>,
}

/// Content block inside a thread message.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContentBlock {
    Text { text: TextContent },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct TextContent {
    pub value: String,
}
