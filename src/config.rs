//! Configuration loading and constants.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then process environment variables (`PORT`, `HOST`, `APP_COLOR`,
//! `APP_VERSION`, `LOG_FORMAT`), then CLI flags. It is read once at startup
//! and shared read-only with every request.

use serde::Deserialize;
use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// Defaults
// =============================================================================

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address (all interfaces, as container platforms expect)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Color label reported when `APP_COLOR` is not set
pub const DEFAULT_COLOR: &str = "unknown";

/// Version label reported when `APP_VERSION` is not set
pub const DEFAULT_VERSION: &str = "v1";

/// Service identifier reported by the pipeline variant's health check
pub const PIPELINE_SERVICE_NAME: &str = "cat2-pipeline-app";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "release_demo=info,tower_http=info";

/// Host name used when the OS does not report one
pub const FALLBACK_HOSTNAME: &str = "localhost";

/// Cache-Control for health responses; probes must never see a cached answer
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Environment variable names
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_APP_COLOR: &str = "APP_COLOR";
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpServerConfig,
    /// Labels describing which release this instance belongs to
    pub deployment: DeploymentConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    /// Port to listen on; 0 asks the OS for an ephemeral port
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Blue/green deployment labels
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Environment color ("blue", "green", ...)
    pub color: String,
    /// Release version label
    pub version: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then overlay values
    /// returned by `lookup` for the known environment variable names.
    pub fn load<P, F>(path: Option<P>, lookup: F) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.bind_addr()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing sections and keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Overlay environment values. Unset and empty variables leave the
    /// current value untouched.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(port) = get(ENV_PORT) {
            self.http.port = parse_port(&port)?;
        }
        if let Some(host) = get(ENV_HOST) {
            self.http.host = host;
        }
        if let Some(color) = get(ENV_APP_COLOR) {
            self.deployment.color = color;
        }
        if let Some(version) = get(ENV_APP_VERSION) {
            self.deployment.version = version;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Socket address the HTTP listener binds to.
    ///
    /// `http.host` may be an IP literal or a host name; names resolve to
    /// their first address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = || ConfigError::InvalidHost(self.http.host.clone());

        (self.http.host.as_str(), self.http.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(value.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid port '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),
    #[error("Invalid host '{0}': not an IP address or resolvable host name")]
    InvalidHost(String),
    #[error("Invalid log format '{0}': expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}
