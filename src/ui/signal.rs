//! Graceful shutdown signal handling.

/// Resolve when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("shutdown signal received");
}
