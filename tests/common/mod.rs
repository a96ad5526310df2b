//! Shared utilities for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tower::ServiceExt;

use status_fn::{HttpServer, PolicyHandle, ServiceConfig, Shutdown};

/// Send one GET through the router without a socket.
pub async fn get(router: Router, path: &str) -> Response {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

/// Collect status and body text.
pub async fn read(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// A running server with its control channels.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub config_updates: mpsc::UnboundedSender<ServiceConfig>,
}

/// Start a server for `routes` on an OS-assigned local port.
///
/// The listener is bound before this returns, so connections made right
/// away queue until the server task starts accepting.
#[allow(dead_code)]
pub async fn start_server(routes: Router, policy: PolicyHandle) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let (config_updates, rx) = mpsc::unbounded_channel();
    let server = HttpServer::new(config, routes, policy);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        config_updates,
    }
}
