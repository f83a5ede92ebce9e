//! HTTP server setup.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Graceful shutdown on signal

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::VitalsConfig;
use crate::flags::FlagState;
use crate::http::health;
use crate::http::info;
use crate::http::request::UuidRequestId;

/// Application state injected into handlers.
///
/// Everything here is read-only after startup; requests share it via `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Hostname reported by the info endpoint, resolved once at startup.
    pub hostname: String,
    pub config: Arc<VitalsConfig>,
    pub flags: Arc<FlagState>,
}

/// HTTP server for the diagnostics service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and flag state.
    pub fn new(config: VitalsConfig, flags: FlagState) -> Self {
        let state = AppState {
            hostname: config.resolved_hostname(),
            config: Arc::new(config),
            flags: Arc::new(flags),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let request_timeout =
            Duration::from_secs(state.config.listener.request_timeout_secs);

        Router::new()
            .route("/api/info", get(info::info_handler))
            .route("/healthz", get(health::healthz))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
