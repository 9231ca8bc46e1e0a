//! relay-chat - assistant-run chat backend
//!
//! An HTTP service that drives the hosted assistants API run protocol
//! (create thread, post message, start run, poll status, fetch reply)
//! plus the conversation coordinator that manages send-attempt state
//! on top of it.

pub mod api;
pub mod assistant;
pub mod chat;
pub mod config;
