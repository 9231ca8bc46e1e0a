//! HTTP API
//!
//! Inbound boundary: `POST /api/run-assistant` drives one full assistant
//! run to completion and returns the reply text.

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::assistant::AssistantService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<dyn AssistantService>,
}

impl AppState {
    pub fn new(assistant: Arc<dyn AssistantService>) -> Self {
        Self { assistant }
    }
}
