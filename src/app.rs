//! The two demo services and router construction.
//!
//! Both services answer the same two routes. They differ only in what the
//! responses say: the pipeline service reports a fixed service identifier,
//! while the blue/green service echoes its color and version labels so a
//! cutover can be observed from outside.

use std::fmt;

use axum::Router;

use crate::config::AppConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Which demo service a process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// CI/CD pipeline exercise target
    Pipeline,
    /// Blue/green release exercise target
    BlueGreen,
}

impl Variant {
    /// Name of the binary that runs this variant.
    pub fn binary_name(self) -> &'static str {
        match self {
            Variant::Pipeline => "pipeline-app",
            Variant::BlueGreen => "bluegreen-app",
        }
    }

    /// The line logged once the listener is bound.
    pub fn startup_message(self, port: u16, config: &AppConfig) -> String {
        match self {
            Variant::Pipeline => format!("Server listening on port {port}"),
            Variant::BlueGreen => format!(
                "Blue/Green demo listening on {port} [{}]",
                config.deployment.color
            ),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Build the application for `variant` without binding a socket.
pub fn create_app(variant: Variant, config: AppConfig) -> Router {
    create_router(AppState::new(variant, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_messages() {
        let mut config = AppConfig::default();
        config.deployment.color = "blue".to_string();

        assert_eq!(
            Variant::Pipeline.startup_message(3000, &config),
            "Server listening on port 3000"
        );
        assert_eq!(
            Variant::BlueGreen.startup_message(8080, &config),
            "Blue/Green demo listening on 8080 [blue]"
        );
    }

    #[test]
    fn display_uses_binary_name() {
        assert_eq!(Variant::Pipeline.to_string(), "pipeline-app");
        assert_eq!(Variant::BlueGreen.to_string(), "bluegreen-app");
    }
}
