use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::Fault;

/// Lets handlers return `Result<_, Fault>` directly
///
/// The response produced here is only a carrier: the fault rides in the
/// response extensions until a fault boundary middleware takes it out and
/// resolves it. Without a boundary the client sees a bare 500.
impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}
