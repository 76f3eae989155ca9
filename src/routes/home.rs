//! Root page handler.

use axum::extract::State;

use crate::app::Variant;
use crate::state::AppState;

/// Body served by the pipeline variant at `/`
pub const PIPELINE_HOME_TEXT: &str = "CI/CD pipeline demo application is running.";

/// Plain-text description of the running instance.
pub fn home_text(state: &AppState) -> String {
    match state.variant {
        Variant::Pipeline => PIPELINE_HOME_TEXT.to_string(),
        Variant::BlueGreen => {
            let deployment = &state.config.deployment;
            format!(
                "Blue/Green demo ({}) running on {} \u{2014} version {}",
                deployment.color, state.hostname, deployment.version
            )
        }
    }
}

/// Handler for `GET /`.
pub async fn index(State(state): State<AppState>) -> String {
    home_text(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn pipeline_text_is_static() {
        let state = AppState::with_hostname(Variant::Pipeline, AppConfig::default(), "ignored");
        assert_eq!(home_text(&state), "CI/CD pipeline demo application is running.");
    }

    #[test]
    fn blue_green_text_interpolates_host_and_labels() {
        let mut config = AppConfig::default();
        config.deployment.color = "blue".to_string();
        let state = AppState::with_hostname(Variant::BlueGreen, config, "web-1");

        assert_eq!(
            home_text(&state),
            "Blue/Green demo (blue) running on web-1 \u{2014} version v1"
        );
    }
}
