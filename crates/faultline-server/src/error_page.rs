use std::any::Any;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// Body the transport layer renders when nothing else produced one
#[derive(Debug, Clone, Copy)]
pub struct ErrorPage {
    include_message: bool,
}

#[derive(Debug, Serialize)]
struct ErrorPageBody<'a> {
    status: u16,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl ErrorPage {
    pub const fn new(include_message: bool) -> Self {
        Self { include_message }
    }

    /// Render the page for `status`
    ///
    /// `message` is dropped unless the page is configured to include it, and
    /// always for server errors.
    pub fn render(self, status: StatusCode, path: Option<&str>, message: Option<&str>) -> Response {
        let body = ErrorPageBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown Status"),
            path,
            message: message.filter(|_| self.include_message && !status.is_server_error()),
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a handler or resolution function that panicked
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();

    tracing::error!(panic = %detail, "request handling panicked");

    ErrorPage::new(false).render(StatusCode::INTERNAL_SERVER_ERROR, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn message_hidden_by_default() {
        let response = ErrorPage::new(false).render(StatusCode::BAD_REQUEST, Some("/api/members/bad"), Some("bad id"));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status": 400, "error": "Bad Request", "path": "/api/members/bad" })
        );
    }

    #[tokio::test]
    async fn message_included_when_configured() {
        let response = ErrorPage::new(true).render(StatusCode::BAD_REQUEST, Some("/api/members/bad"), Some("bad id"));

        let body = body_json(response).await;
        assert_eq!(body["message"], "bad id");
    }

    #[tokio::test]
    async fn server_error_pages_never_show_message() {
        let response = ErrorPage::new(true).render(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("/api/members/ex"),
            Some("invalid user"),
        );

        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status": 500, "error": "Internal Server Error", "path": "/api/members/ex" })
        );
    }

    #[tokio::test]
    async fn panic_renders_generic_500() {
        let response = panic_response(Box::new("resolution function exploded"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "status": 500, "error": "Internal Server Error" }));
    }
}
