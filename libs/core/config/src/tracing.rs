use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Default directives when `RUST_LOG` is unset
fn default_directives(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => "info,sqlx=warn",
        Environment::Development => "debug,sqlx=info,hyper=info,tower_http=debug",
    }
}

/// Install the color-eyre panic and error report hooks.
///
/// Reports include the source location but not the environment section.
/// A second call is ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Install the global subscriber.
///
/// Production writes flattened JSON lines without targets; development
/// writes multi-line pretty output with targets. Both carry an
/// `ErrorLayer` so eyre reports include the active span trace. `RUST_LOG`
/// replaces the default directives.
///
/// Returns `false` when a subscriber was already installed, which is
/// expected when several tests initialize logging.
pub fn init_tracing(environment: &Environment) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let installed = match environment {
        Environment::Production => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(false),
            )
            .try_init(),
        Environment::Development => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(?environment, "Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_per_environment() {
        assert!(default_directives(&Environment::Production).starts_with("info"));
        assert!(default_directives(&Environment::Development).starts_with("debug"));
        assert!(EnvFilter::try_new(default_directives(&Environment::Development)).is_ok());
    }

    #[test]
    fn test_second_init_is_reported() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Development);
            assert!(!init_tracing(&Environment::Production));
        });
    }
}
