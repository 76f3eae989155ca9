//! HTTP server startup and shutdown.
//!
//! The listener is bound eagerly so the caller learns the real address
//! (including an OS-assigned port when 0 was requested) before serving
//! starts. Serving runs either in the foreground until a termination signal
//! arrives, or in a background task that tests close explicitly.

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum_server::Handle;
use tokio::task::JoinHandle;

use super::shutdown;

/// Grace period given to in-flight requests by [`RunningServer::close`]
pub const CLOSE_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A bound but not yet serving HTTP listener.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind the listening socket.
    pub fn bind(addr: SocketAddr) -> Result<Self, ServerError> {
        let bind_err = |source| ServerError::Bind { addr, source };

        let listener = TcpListener::bind(addr).map_err(bind_err)?;
        listener.set_nonblocking(true).map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        tracing::debug!(%addr, %local_addr, "Bound HTTP listener");

        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve `app` until SIGINT or SIGTERM, then drain connections.
    ///
    /// This function blocks until the server shuts down.
    pub async fn run_until_signal(self, app: Router) -> Result<(), ServerError> {
        let handle = Handle::new();
        shutdown::setup_shutdown_handler(handle.clone());

        axum_server::from_tcp(self.listener)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!(addr = %self.local_addr, "Server stopped");
        Ok(())
    }

    /// Serve `app` in a background task.
    pub fn spawn(self, app: Router) -> RunningServer {
        let handle = Handle::new();
        let server = axum_server::from_tcp(self.listener).handle(handle.clone());
        let task = tokio::spawn(async move { server.serve(app.into_make_service()).await });

        RunningServer {
            local_addr: self.local_addr,
            handle,
            task,
        }
    }
}

/// A server serving in a background task.
pub struct RunningServer {
    local_addr: SocketAddr,
    handle: Handle,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL for plain HTTP requests against this server.
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections, let in-flight requests finish, and wait
    /// until the listening socket has been released.
    pub async fn close(self) -> Result<(), ServerError> {
        self.handle.graceful_shutdown(Some(CLOSE_GRACE_PERIOD));

        self.task.await??;

        tracing::debug!(addr = %self.local_addr, "Server closed");
        Ok(())
    }
}
