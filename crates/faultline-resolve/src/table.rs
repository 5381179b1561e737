//! Kind-indexed handler tables

use std::fmt;
use std::sync::Arc;

use faultline_core::{ErrorCode, ErrorResult, Fault, FaultKind, FaultPattern};
use http::StatusCode;

/// Function turning a matched fault into a client body
pub type ResolveFn = Arc<dyn Fn(&Fault) -> ErrorResult + Send + Sync>;

/// Where a table is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerScope {
    /// Request-scoped table owned by one handling unit
    Unit(String),
    /// Advice table shared by every covered unit
    Global,
}

impl fmt::Display for HandlerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(name) => write!(f, "unit:{name}"),
            Self::Global => f.write_str("global"),
        }
    }
}

/// Status and body produced by a handler entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResolution {
    pub status: StatusCode,
    pub body: ErrorResult,
}

/// One registered handler
pub struct HandlerEntry {
    pattern: FaultPattern,
    status: StatusCode,
    resolve: ResolveFn,
}

impl HandlerEntry {
    pub const fn pattern(&self) -> FaultPattern {
        self.pattern
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Run the resolution function
    pub fn resolve(&self, fault: &Fault) -> TableResolution {
        TableResolution {
            status: self.status,
            body: (self.resolve)(fault),
        }
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("pattern", &self.pattern)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Immutable registry of handler entries
///
/// Built once at startup. Lookup picks the entry for the fault's exact kind,
/// then for its nearest ancestor, then the wildcard. Among entries for the
/// same pattern the first registered wins.
#[derive(Debug)]
pub struct HandlerTable {
    scope: HandlerScope,
    entries: Vec<HandlerEntry>,
}

impl HandlerTable {
    pub const fn builder(scope: HandlerScope) -> HandlerTableBuilder {
        HandlerTableBuilder {
            scope,
            entries: Vec::new(),
        }
    }

    /// The mapping every member unit uses
    ///
    /// | kind | status | code |
    /// |---|---|---|
    /// | validation | 400 | `BAD` |
    /// | domain | 400 | `USER-EX` |
    /// | anything else | 500 | `EX` with a fixed message |
    pub fn standard(scope: HandlerScope) -> Self {
        Self::builder(scope)
            .on(FaultKind::Validation, StatusCode::BAD_REQUEST, |fault| {
                ErrorResult::new(ErrorCode::BadInput, fault.message())
            })
            .on(FaultKind::Domain, StatusCode::BAD_REQUEST, |fault| {
                ErrorResult::new(ErrorCode::UserError, fault.message())
            })
            .on_any(StatusCode::INTERNAL_SERVER_ERROR, |_| ErrorResult::internal())
            .build()
    }

    pub const fn scope(&self) -> &HandlerScope {
        &self.scope
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most specific entry matching the fault, if any
    pub fn lookup(&self, fault: &Fault) -> Option<&HandlerEntry> {
        FaultPattern::candidates(fault.kind())
            .find_map(|pattern| self.entries.iter().find(|entry| entry.pattern == pattern))
    }

    /// Resolve the fault through this table
    ///
    /// Logs the fault with its cause chain whether or not an entry matched.
    pub fn handle(&self, fault: &Fault) -> Option<TableResolution> {
        let Some(entry) = self.lookup(fault) else {
            tracing::debug!(
                scope = %self.scope,
                kind = %fault.kind(),
                message = %fault.message(),
                cause = %fault.cause_chain(),
                "no handler entry matched"
            );
            return None;
        };

        tracing::error!(
            scope = %self.scope,
            pattern = %entry.pattern,
            kind = %fault.kind(),
            message = %fault.message(),
            cause = %fault.cause_chain(),
            status = entry.status.as_u16(),
            "fault handled by table"
        );

        Some(entry.resolve(fault))
    }
}

/// Collects entries in declaration order
pub struct HandlerTableBuilder {
    scope: HandlerScope,
    entries: Vec<HandlerEntry>,
}

impl HandlerTableBuilder {
    /// Register a handler for `kind` and every kind below it
    #[must_use]
    pub fn on<F>(self, kind: FaultKind, status: StatusCode, resolve: F) -> Self
    where
        F: Fn(&Fault) -> ErrorResult + Send + Sync + 'static,
    {
        self.push(FaultPattern::Kind(kind), status, resolve)
    }

    /// Register the catch-all handler
    #[must_use]
    pub fn on_any<F>(self, status: StatusCode, resolve: F) -> Self
    where
        F: Fn(&Fault) -> ErrorResult + Send + Sync + 'static,
    {
        self.push(FaultPattern::Any, status, resolve)
    }

    fn push<F>(mut self, pattern: FaultPattern, status: StatusCode, resolve: F) -> Self
    where
        F: Fn(&Fault) -> ErrorResult + Send + Sync + 'static,
    {
        self.entries.push(HandlerEntry {
            pattern,
            status,
            resolve: Arc::new(resolve),
        });
        self
    }

    pub fn build(self) -> HandlerTable {
        HandlerTable {
            scope: self.scope,
            entries: self.entries,
        }
    }
}
