use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use strum::{Display, EnumIter};
use thiserror::Error;

/// Lower-level error wrapped by a fault, kept for operators only
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Dispatch tag of a fault
///
/// The set is closed. New kinds are added here together with their place in
/// the hierarchy (see [`FaultKind::parent`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FaultKind {
    /// Caller supplied malformed input
    Validation,
    /// Business-rule violation whose message is meant for the caller
    Domain,
    /// Anything no narrower kind describes
    Unclassified,
}

impl FaultKind {
    /// Nearest ancestor in the fault hierarchy
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Validation | Self::Domain => Some(Self::Unclassified),
            Self::Unclassified => None,
        }
    }

    /// This kind followed by its ancestors, nearest first
    pub fn lineage(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Whether `self` is `ancestor` or descends from it
    pub fn is_a(self, ancestor: Self) -> bool {
        self.lineage().any(|kind| kind == ancestor)
    }
}

/// What a handler entry is registered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultPattern {
    /// One specific kind (and, through lookup order, its descendants)
    Kind(FaultKind),
    /// Wildcard matching every fault
    Any,
}

impl FaultPattern {
    /// Patterns that can match `kind`, most specific first
    ///
    /// Exact kind, then each ancestor, then the wildcard.
    pub fn candidates(kind: FaultKind) -> impl Iterator<Item = Self> {
        kind.lineage().map(Self::Kind).chain(std::iter::once(Self::Any))
    }
}

impl fmt::Display for FaultPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// A condition raised while handling a request
///
/// The cause is never part of a client response; it only reaches logs via
/// [`Fault::cause_chain`].
#[derive(Debug, Clone, Error)]
#[error("{kind} fault: {message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Bad caller input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Validation, message)
    }

    /// Business-rule violation
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Domain, message)
    }

    /// Anything else
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Unclassified, message)
    }

    /// Attach the lower-level error that triggered this fault
    #[must_use]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Render the wrapped cause and all of its sources, outermost first
    ///
    /// Empty when the fault carries no cause.
    pub fn cause_chain(&self) -> String {
        let mut rendered = Vec::new();
        let mut next: Option<&(dyn StdError + 'static)> = self
            .cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static));

        while let Some(error) = next {
            rendered.push(error.to_string());
            next = error.source();
        }

        rendered.join(" <- ")
    }
}
