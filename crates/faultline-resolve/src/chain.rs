//! Ordered fallback resolvers

use std::fmt;

use faultline_core::Fault;
use serde_json::{Map, Value};

use crate::handle::ResponseHandle;

/// A link in the resolver chain
///
/// Implementations inspect the fault themselves. They must not keep the fault
/// or the response beyond the call, and must not mutate shared state.
pub trait Resolver: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Resolve the fault or decline it
    ///
    /// A failure while writing to `response` is the resolver's to log; it
    /// then returns whatever outcome matches the state it left behind.
    fn resolve(&self, fault: &Fault, response: &mut ResponseHandle) -> ResolverOutcome;
}

/// What a single resolver decided
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverOutcome {
    /// The fault is handled; the chain stops
    Resolved(Resolved),
    /// Not this resolver's concern; the chain moves on
    Declined,
}

/// How a resolved fault should be finished
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// Status (and body, if any) were written to the response handle
    Empty,
    /// A named view for a downstream rendering step
    View(View),
}

/// Named view with a JSON model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub name: String,
    pub model: Map<String, Value>,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: Map::new(),
        }
    }

    /// Add a model attribute
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.model.insert(key.into(), value.into());
        self
    }
}

/// Resolvers in registration order
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverChain {
    pub fn builder() -> ResolverChainBuilder {
        ResolverChainBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolver names in invocation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.iter().map(|resolver| resolver.name())
    }

    /// Offer the fault to each resolver until one resolves it
    ///
    /// # Errors
    ///
    /// Returns the original fault, untouched, when every resolver declines
    pub fn resolve(&self, fault: Fault, response: &mut ResponseHandle) -> Result<Resolved, Fault> {
        for resolver in &self.resolvers {
            match resolver.resolve(&fault, response) {
                ResolverOutcome::Resolved(resolved) => {
                    tracing::debug!(
                        resolver = resolver.name(),
                        kind = %fault.kind(),
                        status = response.status().as_u16(),
                        "fault resolved by resolver"
                    );
                    return Ok(resolved);
                }
                ResolverOutcome::Declined => {
                    tracing::trace!(resolver = resolver.name(), kind = %fault.kind(), "resolver declined");
                }
            }
        }

        // The caller reports the propagation
        tracing::debug!(resolvers = self.resolvers.len(), kind = %fault.kind(), "every resolver declined");

        Err(fault)
    }
}

impl fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Appends resolvers; registration order is invocation order
#[derive(Default)]
pub struct ResolverChainBuilder {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverChainBuilder {
    #[must_use]
    pub fn push<R>(mut self, resolver: R) -> Self
    where
        R: Resolver + 'static,
    {
        self.resolvers.push(Box::new(resolver));
        self
    }

    #[must_use]
    pub fn push_boxed(mut self, resolver: Box<dyn Resolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    pub fn build(self) -> ResolverChain {
        ResolverChain {
            resolvers: self.resolvers,
        }
    }
}
