//! Shared application state for request handlers.

use std::sync::Arc;

use sysinfo::System;

use crate::app::Variant;
use crate::config::{AppConfig, FALLBACK_HOSTNAME};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is resolved once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub variant: Variant,
    pub config: Arc<AppConfig>,
    pub hostname: Arc<str>,
}

impl AppState {
    /// Creates the state for `variant`, resolving the host name from the OS.
    pub fn new(variant: Variant, config: AppConfig) -> Self {
        let hostname = System::host_name()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string());
        Self::with_hostname(variant, config, hostname)
    }

    /// Creates the state with an explicit host name.
    pub fn with_hostname(
        variant: Variant,
        config: AppConfig,
        hostname: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            variant,
            config: Arc::new(config),
            hostname: hostname.into(),
        }
    }
}
