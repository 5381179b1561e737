use std::collections::HashSet;
use std::path::Path;

use crate::{Config, UnitSelector};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Unit names in the advice selector are checked by the server, which
    /// owns the list of handling units.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health()?;
        self.validate_resolvers()?;
        self.validate_advice()?;
        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        Ok(())
    }

    /// Each resolver may appear once; order is invocation order
    fn validate_resolvers(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();

        for kind in &self.resolvers {
            if !seen.insert(kind) {
                anyhow::bail!("resolver '{kind}' is registered more than once");
            }
        }

        Ok(())
    }

    fn validate_advice(&self) -> anyhow::Result<()> {
        if self.advice.enabled
            && let UnitSelector::Units(ref units) = self.advice.units
            && units.is_empty()
        {
            anyhow::bail!("advice is enabled but advice.units is empty; use \"*\" or disable advice");
        }

        Ok(())
    }
}
