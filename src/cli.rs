//! Process entry shared by both binaries.
//!
//! Parses flags, loads configuration, initializes tracing, binds the
//! listener, logs the startup line and serves until a termination signal.

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::app::{create_app, Variant};
use crate::config::AppConfig;
use crate::error::Error;
use crate::http::Server;
use crate::logging::{init_tracing, resolve_filter};

/// Minimal HTTP demo service for release exercises
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level filter (e.g., "release_demo=debug,tower_http=info")
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Parse process arguments, naming the command after the variant's binary.
    pub fn parse_for(variant: Variant) -> Self {
        let matches = Self::command().name(variant.binary_name()).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Resolve the full configuration: file, then environment, then flags.
    pub fn load_config<F>(&self, lookup: F) -> Result<AppConfig, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::load(self.config.as_deref(), lookup)?;

        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        config.bind_addr()?;

        Ok(config)
    }
}

/// Run `variant` as the main program.
pub async fn run(variant: Variant) -> Result<(), Error> {
    let args = Args::parse_for(variant);
    let config = args.load_config(|key| std::env::var(key).ok())?;

    let filter = resolve_filter(args.log_level.clone(), std::env::var("RUST_LOG").ok());
    init_tracing(&filter, config.logging.format)?;

    tracing::info!(
        variant = %variant,
        host = %config.http.host,
        port = config.http.port,
        color = %config.deployment.color,
        version = %config.deployment.version,
        "Loaded configuration"
    );

    let server = Server::bind(config.bind_addr()?)?;
    tracing::info!(
        "{}",
        variant.startup_message(server.local_addr().port(), &config)
    );

    let app = create_app(variant, config);
    server.run_until_signal(app).await?;

    Ok(())
}
