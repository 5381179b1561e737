//! Logging for Faultline
//!
//! Installs a `tracing-subscriber` registry with an env filter and a text or
//! JSON formatter. Fault diagnostics (kind, message, cause chain) are emitted as
//! structured fields, so the JSON format keeps them machine-readable.

use faultline_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from configuration
///
/// `RUST_LOG` overrides the configured filter; an unparsable filter falls
/// back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(&config.log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry.with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_span_list(false);

            registry.with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(filter = %config.log_filter, format = ?config.format, "logging initialized");

    Ok(())
}

fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_used_without_rust_log() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(build_filter("faultline=debug").to_string(), "faultline=debug");
        });
    }

    #[test]
    fn rust_log_overrides_configuration() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            assert_eq!(build_filter("faultline=debug").to_string(), "warn");
        });
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(build_filter("faultline=verbose").to_string(), "info");
        });
    }
}
