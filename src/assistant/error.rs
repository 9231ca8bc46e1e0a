//! Run protocol error taxonomy
//!
//! One variant per protocol step. All of them collapse to a generic
//! internal error at the HTTP boundary; the variant is for logs and tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("thread creation failed: {0}")]
    ThreadCreation(String),

    #[error("message post failed: {0}")]
    MessagePost(String),

    #[error("run start failed: {0}")]
    RunStart(String),

    #[error("run status fetch failed: {0}")]
    StatusFetch(String),

    #[error("reply extraction failed: {0}")]
    ReplyExtraction(String),

    #[error("run did not reach a terminal status within {0:?}")]
    Timeout(std::time::Duration),
}
