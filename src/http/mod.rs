//! HTTP server module.
//!
//! Plain HTTP only; TLS is expected to terminate at the load balancer that
//! switches between the blue and green environments.
//!
//! The server includes:
//! - Eager binding with OS-assigned ports for tests
//! - Explicit close for background servers
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{RunningServer, Server, ServerError, CLOSE_GRACE_PERIOD};
pub use shutdown::SHUTDOWN_GRACE_PERIOD;
