//! Conversation coordinator
//!
//! Owns the in-memory state of a send attempt and turns one submitted
//! string into either a committed user+assistant message pair plus a
//! touched conversation, or a fully reverted state with the original input
//! restored. Never a half-applied state.

mod coordinator;
mod state;
mod store;
mod strategy;

#[cfg(test)]
pub mod testing;

pub use coordinator::{ChatCoordinator, SendOutcome};
pub use state::{Assistant, ChatMessage, ChatState, Conversation, Role, Workspace};
pub use store::ConversationStore;
pub use strategy::{HostedChatStub, HttpAssistantStrategy, SendError, SendStrategy};
