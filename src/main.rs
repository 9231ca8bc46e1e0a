//! relay-chat server entry point

use relay_chat::api::{create_router, AppState};
use relay_chat::assistant::{AssistantRunner, OpenAiAssistantApi, RunPolicy};
use relay_chat::config::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration: missing credentials abort before the server binds.
    let config = Config::from_env()?;

    let api = OpenAiAssistantApi::new(
        config.api_key.clone(),
        config.assistant_id.clone(),
        config.base_url.clone(),
    );
    let runner = AssistantRunner::new(
        api,
        RunPolicy {
            poll_interval: config.poll_interval,
            run_timeout: config.run_timeout,
        },
    );

    let state = AppState::new(Arc::new(runner));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(assistant_id = %config.assistant_id, "relay-chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
