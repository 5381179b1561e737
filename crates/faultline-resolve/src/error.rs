use http::StatusCode;
use thiserror::Error;

/// Failure writing to an in-flight response
#[derive(Debug, Error)]
pub enum TransportError {
    /// Status and body were already sent
    #[error("response already committed with status {status}")]
    Committed { status: StatusCode },
}
