//! Error types for the alert server.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur in the alert server.
///
/// Request errors are reported through the status code alone; the response
/// body is always empty.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A pagination parameter was negative.
    #[error("invalid pagination parameter {param}: {value}")]
    InvalidPagination {
        /// The offending query parameter.
        param: &'static str,
        /// The value it parsed to.
        value: i64,
    },

    /// The request body was not a well-formed alert object.
    #[error("malformed alert body: {0}")]
    MalformedBody(String),

    /// No route matches the request path.
    #[error("not found: {0}")]
    NotFound(String),

    /// The route exists but does not accept the request method.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(std::net::SocketAddr, std::io::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPagination { .. } | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::BindFailed(_, _) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = %status, error = %self, "request rejected");

        if matches!(self, Self::MethodNotAllowed(_)) {
            return (status, [(header::ALLOW, "GET,HEAD,POST")]).into_response();
        }
        status.into_response()
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use test_case::test_case;

    #[test_case(ServerError::InvalidPagination { param: "page", value: -1 }, StatusCode::BAD_REQUEST ; "negative page")]
    #[test_case(ServerError::MalformedBody("eof".into()), StatusCode::BAD_REQUEST ; "bad body")]
    #[test_case(ServerError::NotFound("/nope".into()), StatusCode::NOT_FOUND ; "unknown path")]
    #[test_case(ServerError::MethodNotAllowed("DELETE".into()), StatusCode::METHOD_NOT_ALLOWED ; "bad method")]
    #[test_case(ServerError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR ; "internal")]
    fn test_error_status(err: ServerError, expected: StatusCode) {
        assert_eq!(err.status(), expected);
    }

    #[tokio::test]
    async fn test_error_response_has_empty_body() {
        let err = ServerError::InvalidPagination {
            param: "size",
            value: -1,
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_method_not_allowed_sets_allow_header() {
        let response = ServerError::MethodNotAllowed("PUT".into()).into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,HEAD,POST");
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err = ServerError::from(serde_err);

        assert!(matches!(err, ServerError::MalformedBody(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ServerError::InvalidPagination {
            param: "page",
            value: -1,
        };
        assert_eq!(err.to_string(), "invalid pagination parameter page: -1");

        let err = ServerError::NotFound("/alerts".to_string());
        assert_eq!(err.to_string(), "not found: /alerts");
    }
}
