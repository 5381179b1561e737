use std::sync::Arc;

use faultline_core::Fault;

use crate::chain::{Resolved, ResolverChain};
use crate::handle::ResponseHandle;
use crate::table::{HandlerScope, HandlerTable, TableResolution};

/// Which mechanism resolved a fault
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    /// A handler table entry produced the status and body
    Table {
        scope: HandlerScope,
        resolution: TableResolution,
    },
    /// A resolver finished the response
    Resolver(Resolved),
}

/// Fault resolution for one handling unit
///
/// Order: the unit's own table, then the advice table, then the resolver
/// chain. Cheap to clone; everything inside is shared and read-only.
#[derive(Debug, Clone)]
pub struct FaultDispatcher {
    unit: Option<Arc<HandlerTable>>,
    advice: Option<Arc<HandlerTable>>,
    chain: Arc<ResolverChain>,
}

impl FaultDispatcher {
    pub const fn new(chain: Arc<ResolverChain>) -> Self {
        Self {
            unit: None,
            advice: None,
            chain,
        }
    }

    /// Attach the unit's request-scoped table
    #[must_use]
    pub fn with_unit_table(mut self, table: Arc<HandlerTable>) -> Self {
        self.unit = Some(table);
        self
    }

    /// Attach the global advice table
    #[must_use]
    pub fn with_advice(mut self, table: Arc<HandlerTable>) -> Self {
        self.advice = Some(table);
        self
    }

    pub const fn has_advice(&self) -> bool {
        self.advice.is_some()
    }

    /// Resolve a fault raised by this unit
    ///
    /// # Errors
    ///
    /// Returns the original fault when neither a table nor a resolver handled
    /// it; the caller must let it propagate to the transport layer
    pub fn dispatch(&self, fault: Fault, response: &mut ResponseHandle) -> Result<Dispatched, Fault> {
        for table in self.unit.iter().chain(self.advice.iter()) {
            if let Some(resolution) = table.handle(&fault) {
                return Ok(Dispatched::Table {
                    scope: table.scope().clone(),
                    resolution,
                });
            }
        }

        self.chain.resolve(fault, response).map(Dispatched::Resolver)
    }
}
