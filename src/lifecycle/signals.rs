//! OS signal handling.
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGTERM is only watched on Unix; Ctrl+C everywhere

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C (or SIGTERM on Unix) and trigger `shutdown`.
pub async fn trigger_on_signal(shutdown: Shutdown) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable, watching Ctrl+C only");
                wait_ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    wait_ctrl_c().await;

    tracing::info!("Termination signal received");
    shutdown.trigger();
}

async fn wait_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
