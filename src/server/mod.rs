// HTTP serving for the classification engine
//
// Stateless request/response: every worker shares one engine, which in turn
// shares one immutable artifact snapshot per request. The feedback log is
// the only mutable resource on this path.

mod handlers;
pub mod types;

pub use handlers::create_router;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::engine::Engine;
use crate::feedback::FeedbackStore;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Shared state behind every handler.
pub struct AppState {
    pub engine: Arc<Engine>,
    pub feedback: Arc<dyn FeedbackStore>,
}

/// Start the HTTP server and serve until the process exits.
pub async fn serve(state: Arc<AppState>, config: ServerConfig) -> Result<()> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_address))?;

    // Problem descriptions are short; 1MB leaves room without inviting
    // oversized payloads.
    let app = create_router(state)
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting hwcompass server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
