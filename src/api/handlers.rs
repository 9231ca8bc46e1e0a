//! HTTP request handlers

use super::types::{ErrorResponse, RunAssistantRequest, RunAssistantResponse};
use super::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router. Registering only `post` on the run route makes
/// axum answer every other method with 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/run-assistant", post(run_assistant))
        .route("/version", get(get_version))
        .with_state(state)
}

/// Drive one full assistant run for the posted user message.
///
/// Every run failure collapses to a generic 500; the concrete step error is
/// logged, never exposed to the client.
async fn run_assistant(
    State(state): State<AppState>,
    Json(req): Json<RunAssistantRequest>,
) -> Result<Json<RunAssistantResponse>, AppError> {
    let message = state
        .assistant
        .generate_reply(&req.user_message)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Assistant run failed");
            AppError::Internal
        })?;

    Ok(Json(RunAssistantResponse { message }))
}

async fn get_version() -> &'static str {
    concat!("relay-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
