#![allow(clippy::must_use_candidate)]

pub mod advice;
mod loader;
pub mod resolvers;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use advice::*;
pub use resolvers::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Faultline configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Resolvers to register, in invocation order
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<ResolverKind>,
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Global handler table settings
    #[serde(default)]
    pub advice: AdviceConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolvers: default_resolvers(),
            server: ServerConfig::default(),
            advice: AdviceConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn default_resolvers() -> Vec<ResolverKind> {
    vec![ResolverKind::Validation]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.resolvers, vec![ResolverKind::Validation]);
        assert!(config.server.health.enabled);
        assert!(!config.server.error_page.include_message);
        assert!(config.advice.enabled);
        assert!(config.advice.units.covers("members-v1"));
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn full_file() {
        let toml = r#"
            resolvers = ["validation"]

            [server]
            listen_address = "127.0.0.1:9090"

            [server.health]
            path = "/ready"

            [server.error_page]
            include_message = true

            [advice]
            units = ["members-v3"]

            [telemetry]
            log_filter = "faultline=debug"
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_address, Some("127.0.0.1:9090".parse().unwrap()));
        assert_eq!(config.server.health.path, "/ready");
        assert!(config.server.error_page.include_message);
        assert!(config.advice.units.covers("members-v3"));
        assert!(!config.advice.units.covers("members-v1"));
        assert_eq!(config.telemetry.log_filter, "faultline=debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = toml::from_str::<Config>("[server]\nport = 80").unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn empty_resolver_list_is_allowed() {
        let config: Config = toml::from_str("resolvers = []").unwrap();
        assert!(config.resolvers.is_empty());
    }
}
