//! Router assembly and server entry point.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{handler, signal, state::AppState};

/// Assemble the application router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/create-room", post(handler::create_room))
        .route("/api/join-room", post(handler::join_room))
        .route("/api/save-chat", post(handler::save_chat))
        .route("/ws", get(handler::websocket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server with in-memory stores until shutdown.
pub async fn run_server(host: &str, port: u16) -> Result<(), std::io::Error> {
    let state = Arc::new(AppState::new_in_memory());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
}
