use axum::Json;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultline_core::Fault;
use faultline_resolve::{Dispatched, FaultDispatcher, Resolved, ResponseHandle};
use http::StatusCode;

use crate::error_page::ErrorPage;

/// Fault resolution state attached to one handling unit
#[derive(Debug, Clone)]
pub struct FaultBoundary {
    unit: &'static str,
    dispatcher: FaultDispatcher,
    error_page: ErrorPage,
}

impl FaultBoundary {
    pub const fn new(unit: &'static str, dispatcher: FaultDispatcher, error_page: ErrorPage) -> Self {
        Self {
            unit,
            dispatcher,
            error_page,
        }
    }

    /// Turn a fault raised by this unit into the final response
    pub fn resolve(&self, fault: Fault, path: &str) -> Response {
        let mut handle = ResponseHandle::new();

        match self.dispatcher.dispatch(fault, &mut handle) {
            Ok(Dispatched::Table { resolution, .. }) => (resolution.status, Json(resolution.body)).into_response(),
            Ok(Dispatched::Resolver(Resolved::Empty)) => self.render_handle(&handle, path),
            Ok(Dispatched::Resolver(Resolved::View(view))) => {
                tracing::debug!(unit = self.unit, view = %view.name, "rendering resolver view");
                let mut response = (handle.status(), Json(view.model)).into_response();
                response.headers_mut().extend(handle.headers().clone());
                response
            }
            Err(fault) => {
                tracing::error!(
                    unit = self.unit,
                    kind = %fault.kind(),
                    message = %fault.message(),
                    cause = %fault.cause_chain(),
                    path,
                    "unhandled fault reached the transport layer"
                );
                // 500 bodies never carry the fault message, whatever the page config
                self.error_page
                    .render(StatusCode::INTERNAL_SERVER_ERROR, Some(path), None)
            }
        }
    }

    /// Finish a response a resolver wrote to directly
    fn render_handle(&self, handle: &ResponseHandle, path: &str) -> Response {
        let mut response = if handle.is_error() {
            self.error_page
                .render(handle.status(), Some(path), handle.error_message())
        } else {
            handle.status().into_response()
        };

        response.headers_mut().extend(handle.headers().clone());
        response
    }
}

/// Middleware resolving faults that handlers in a unit return
///
/// Responses without a fault pass through untouched.
pub async fn fault_boundary(State(boundary): State<FaultBoundary>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    let Some(fault) = response.extensions_mut().remove::<Fault>() else {
        return response;
    };

    boundary.resolve(fault, &path)
}
