use serde::Deserialize;
use strum::Display;

/// Built-in resolvers that can be placed in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResolverKind {
    /// Validation faults become a 400 error page
    Validation,
}
