//! Logging initialization.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `logging.level`. Fails if a subscriber
/// is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Pretty => subscriber
            .with(fmt::layer().pretty().with_target(true))
            .try_init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
    }
}

/// Caps sqlx's per-statement `info` events at `warn` unless `level` already
/// names the `sqlx` target.
fn default_directives(level: &str) -> String {
    if level.contains("sqlx") {
        level.to_string()
    } else {
        format!("{},sqlx=warn", level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_logging_is_capped_by_default() {
        assert_eq!(default_directives("info"), "info,sqlx=warn");
        assert_eq!(
            default_directives("debug,persistence=trace"),
            "debug,persistence=trace,sqlx=warn"
        );
    }

    #[test]
    fn test_explicit_sqlx_directive_is_kept() {
        assert_eq!(default_directives("info,sqlx=debug"), "info,sqlx=debug");
    }
}
