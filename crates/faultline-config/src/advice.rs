use serde::Deserialize;

/// Global handler table configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdviceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Handling units the advice table is attached to
    #[serde(default)]
    pub units: UnitSelector,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            units: UnitSelector::All,
        }
    }
}

/// Handling units selected by name, or all of them with `"*"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSelector")]
pub enum UnitSelector {
    #[default]
    All,
    Units(Vec<String>),
}

impl UnitSelector {
    /// Whether the named unit is selected
    pub fn covers(&self, unit: &str) -> bool {
        match self {
            Self::All => true,
            Self::Units(units) => units.iter().any(|name| name == unit),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelector {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<RawSelector> for UnitSelector {
    type Error = String;

    fn try_from(raw: RawSelector) -> Result<Self, Self::Error> {
        match raw {
            RawSelector::One(value) if value == "*" => Ok(Self::All),
            RawSelector::One(value) => Err(format!("expected \"*\" or a list of unit names, got \"{value}\"")),
            RawSelector::Many(units) if units.iter().any(|name| name == "*") => Ok(Self::All),
            RawSelector::Many(units) => Ok(Self::Units(units)),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}
