//! HTTP surface: the newsletter endpoint behind an axum router.

pub mod client;
pub mod errors;
pub mod newsletter;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use regex::Regex;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub signup_delay: Duration,
    email: Regex,
}

impl ApiState {
    pub fn new(signup_delay: Duration) -> Result<Self, regex::Error> {
        Ok(Self {
            signup_delay,
            email: Regex::new(newsletter::EMAIL_PATTERN)?,
        })
    }
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/api/newsletter",
            get(newsletter::status).post(newsletter::subscribe),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(bind: SocketAddr, state: ApiState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(addr = %listener.local_addr()?, "newsletter API listening");

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
