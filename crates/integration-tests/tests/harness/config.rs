//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use faultline_config::{Config, ResolverKind, UnitSelector};
use faultline_server::MEMBERS_V3;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Advice on `members-v3` only, the validation resolver registered
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        config.advice.units = UnitSelector::Units(vec![MEMBERS_V3.to_owned()]);

        Self { config }
    }

    /// Attach the advice table to the named units
    pub fn with_advice_units(mut self, units: &[&str]) -> Self {
        self.config.advice.enabled = true;
        self.config.advice.units = UnitSelector::Units(units.iter().map(|unit| (*unit).to_owned()).collect());
        self
    }

    /// Attach the advice table to every unit
    pub fn with_advice_everywhere(mut self) -> Self {
        self.config.advice.enabled = true;
        self.config.advice.units = UnitSelector::All;
        self
    }

    /// Disable the advice table
    pub fn without_advice(mut self) -> Self {
        self.config.advice.enabled = false;
        self
    }

    /// Replace the resolver chain
    pub fn with_resolvers(mut self, resolvers: &[ResolverKind]) -> Self {
        self.config.resolvers = resolvers.to_vec();
        self
    }

    /// Show fault messages on the default error page
    pub fn include_error_message(mut self) -> Self {
        self.config.server.error_page.include_message = true;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
