use http::{HeaderMap, StatusCode};

use crate::error::TransportError;

/// Response that has not been sent yet
///
/// Resolvers write to it directly. Once committed, further writes fail with
/// [`TransportError::Committed`].
#[derive(Debug, Default)]
pub struct ResponseHandle {
    status: StatusCode,
    headers: HeaderMap,
    error_message: Option<String>,
    error_sent: bool,
    committed: bool,
}

impl ResponseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Change the status without committing
    ///
    /// # Errors
    ///
    /// Returns an error if the response was already committed
    pub fn set_status(&mut self, status: StatusCode) -> Result<(), TransportError> {
        if self.committed {
            return Err(TransportError::Committed { status: self.status });
        }
        self.status = status;
        Ok(())
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Hand the response to the transport's error page for `status`
    ///
    /// Commits the response; the message is only shown if the error page is
    /// configured to include it.
    ///
    /// # Errors
    ///
    /// Returns an error if the response was already committed
    pub fn send_error(&mut self, status: StatusCode, message: impl Into<String>) -> Result<(), TransportError> {
        if self.committed {
            return Err(TransportError::Committed { status: self.status });
        }

        self.status = status;
        self.error_message = Some(message.into());
        self.error_sent = true;
        self.committed = true;

        Ok(())
    }

    /// Whether [`ResponseHandle::send_error`] was called
    pub const fn is_error(&self) -> bool {
        self.error_sent
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Mark the response as sent
    pub fn commit(&mut self) {
        self.committed = true;
    }

    pub const fn is_committed(&self) -> bool {
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handle_is_ok_and_open() {
        let handle = ResponseHandle::new();
        assert_eq!(handle.status(), StatusCode::OK);
        assert!(!handle.is_committed());
        assert!(!handle.is_error());
    }

    #[test]
    fn send_error_commits() {
        let mut handle = ResponseHandle::new();
        handle.send_error(StatusCode::BAD_REQUEST, "bad id").unwrap();

        assert_eq!(handle.status(), StatusCode::BAD_REQUEST);
        assert_eq!(handle.error_message(), Some("bad id"));
        assert!(handle.is_committed());
    }

    #[test]
    fn writes_after_commit_fail() {
        let mut handle = ResponseHandle::new();
        handle.commit();

        let err = handle.send_error(StatusCode::BAD_REQUEST, "bad id").unwrap_err();
        assert!(matches!(err, TransportError::Committed { status } if status == StatusCode::OK));
        assert!(handle.set_status(StatusCode::CONFLICT).is_err());
        assert_eq!(handle.status(), StatusCode::OK);
    }
}
