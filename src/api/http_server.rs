// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use super::assets::asset_handler;
use super::data::data_handler;
use super::handlers::health_handler;
use super::image::{image_handler, invalid_image_path_handler};
use super::pages::{heatmap_handler, index_handler};
use crate::config::ServerConfig;
use crate::dataset::DatasetRegistry;

/// Shared state handed to every handler. Both fields are read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<DatasetRegistry>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(registry: DatasetRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

/// Build the router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    let routes = Router::new()
        .route("/", get(index_handler))
        .route("/heatmap", get(heatmap_handler))
        .route("/data", get(data_handler))
        .route("/image", get(invalid_image_path_handler))
        .route("/image/", get(invalid_image_path_handler))
        .route("/image/*rest", get(image_handler))
        .route("/health", get(health_handler))
        .fallback(asset_handler);

    with_middleware(routes, timeout).with_state(state)
}

/// Timeout (408 once `timeout` elapses), request tracing and permissive CORS.
fn with_middleware<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Bind and serve until Ctrl-C.
pub async fn start_server(state: AppState) -> Result<()> {
    let addr = state.config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Serving on http://{}", listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
