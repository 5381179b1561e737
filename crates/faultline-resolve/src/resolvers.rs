//! Built-in resolvers

use faultline_core::{Fault, FaultKind};
use http::StatusCode;

use crate::chain::{Resolved, Resolver, ResolverOutcome};
use crate::handle::ResponseHandle;

/// Turns validation faults into a transport-level 400
///
/// Writes the status through [`ResponseHandle::send_error`] so the transport's
/// error page renders the body. Every other kind is declined.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationResolver;

impl Resolver for ValidationResolver {
    fn name(&self) -> &str {
        "validation"
    }

    fn resolve(&self, fault: &Fault, response: &mut ResponseHandle) -> ResolverOutcome {
        tracing::info!(kind = %fault.kind(), message = %fault.message(), "validation resolver called");

        if !fault.kind().is_a(FaultKind::Validation) {
            return ResolverOutcome::Declined;
        }

        match response.send_error(StatusCode::BAD_REQUEST, fault.message()) {
            Ok(()) => {
                tracing::info!("validation fault resolved to 400");
                ResolverOutcome::Resolved(Resolved::Empty)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to write 400 for validation fault");
                ResolverOutcome::Declined
            }
        }
    }
}
