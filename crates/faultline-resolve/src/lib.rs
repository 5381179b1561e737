//! Fault resolution for HTTP handling units
//!
//! Two mechanisms turn a raised [`Fault`] into a response:
//! - **Handler tables**: static, kind-indexed entries producing a status and an
//!   [`ErrorResult`](faultline_core::ErrorResult). Checked first.
//! - **Resolver chain**: ordered resolvers that inspect the fault and write to
//!   the response directly, or decline. Checked only when no table matched.
//!
//! [`FaultDispatcher`] runs both for one handling unit. A fault nobody resolves
//! is handed back unchanged.

#![allow(clippy::must_use_candidate)]

pub mod chain;
pub mod dispatch;
pub mod error;
pub mod handle;
pub mod resolvers;
pub mod table;

pub use chain::{Resolved, Resolver, ResolverChain, ResolverOutcome, View};
pub use dispatch::{Dispatched, FaultDispatcher};
pub use error::TransportError;
pub use faultline_core::Fault;
pub use handle::ResponseHandle;
pub use resolvers::ValidationResolver;
pub use table::{HandlerEntry, HandlerScope, HandlerTable, TableResolution};
