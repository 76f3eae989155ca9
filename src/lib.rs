//! Minimal HTTP demo services used as deployment targets.
//!
//! Two services share this crate: the CI/CD pipeline demo (`pipeline-app`)
//! and the blue/green release demo (`bluegreen-app`). Each answers
//! `GET /health` with a JSON status document and `GET /` with a line of
//! plain text. [`create_app`] builds either one without binding a socket;
//! [`http::Server`] binds and serves it.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::{create_app, Variant};
pub use config::AppConfig;
pub use error::Error;
