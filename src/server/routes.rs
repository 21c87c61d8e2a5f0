use super::handlers;
use super::state::AppState;
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/healthz", get(handlers::health_check))
        // Recording collection
        .route(
            "/api/recordings",
            get(handlers::list_recordings).post(handlers::create_recording),
        )
        .route(
            "/api/recordings/:id",
            get(handlers::get_recording).delete(handlers::delete_recording),
        )
        // Request logging, and any origin may call the stub
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the stub on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Recording service stub listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .await
        .context("HTTP server failed")
}
