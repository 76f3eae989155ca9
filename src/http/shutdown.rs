//! Graceful shutdown on SIGTERM/SIGINT.
//!
//! Orchestrators stop the outgoing color of a blue/green pair with SIGTERM,
//! so in-flight requests are drained instead of dropped.

use std::time::Duration;

use axum_server::Handle;

/// How long existing connections may take to finish after a signal
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// Signal listeners are registered before this returns, so a signal that
/// arrives once serving has started is never handled by the default action.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait for existing connections to complete
/// 3. Shutdown gracefully
pub fn setup_shutdown_handler(handle: Handle) {
    let signals = ShutdownSignals::install();

    tokio::spawn(async move {
        let signal = signals.recv().await;
        tracing::info!(signal, "Received signal, initiating graceful shutdown");

        handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
        tracing::info!(
            grace_secs = SHUTDOWN_GRACE_PERIOD.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}

#[cfg(unix)]
struct ShutdownSignals {
    interrupt: Option<tokio::signal::unix::Signal>,
    terminate: Option<tokio::signal::unix::Signal>,
}

#[cfg(unix)]
impl ShutdownSignals {
    /// A signal whose handler cannot be installed is skipped; the other one
    /// still works.
    fn install() -> Self {
        use tokio::signal::unix::{signal, SignalKind};

        let install = |kind: SignalKind, name: &str| match signal(kind) {
            Ok(stream) => Some(stream),
            Err(e) => {
                tracing::error!(error = %e, signal = name, "Failed to install signal handler");
                None
            }
        };

        Self {
            interrupt: install(SignalKind::interrupt(), "SIGINT"),
            terminate: install(SignalKind::terminate(), "SIGTERM"),
        }
    }

    /// Resolves with the name of the first termination signal received.
    async fn recv(mut self) -> &'static str {
        tokio::select! {
            _ = recv_or_pending(self.interrupt.as_mut()) => "SIGINT",
            _ = recv_or_pending(self.terminate.as_mut()) => "SIGTERM",
        }
    }
}

#[cfg(unix)]
async fn recv_or_pending(signal: Option<&mut tokio::signal::unix::Signal>) {
    match signal {
        Some(signal) => {
            signal.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(not(unix))]
struct ShutdownSignals;

#[cfg(not(unix))]
impl ShutdownSignals {
    fn install() -> Self {
        Self
    }

    async fn recv(self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        "SIGINT"
    }
}
