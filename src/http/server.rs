//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the application routes with middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Apply reloaded configuration to the response policy
//! - Stop on the shutdown signal

use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::policy::{build_policy, PolicyHandle};

/// HTTP server hosting status-returning handlers.
pub struct HttpServer {
    router: Router,
    policy: PolicyHandle,
}

impl HttpServer {
    /// Create a server for `routes`. `policy` is the slot reloads are applied to.
    pub fn new(config: ServiceConfig, routes: Router, policy: PolicyHandle) -> Self {
        let router = Self::build_router(&config, routes);
        Self { router, policy }
    }

    /// Wrap the routes with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, routes: Router) -> Router {
        routes
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<ServiceConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            policy = self.policy.current_name(),
            "HTTP server starting"
        );

        let policy = self.policy.clone();
        let reload = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                policy.replace(build_policy(&config.policy));
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reload.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
