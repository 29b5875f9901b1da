//! Error types for the Sitoo API client.
//!
//! # Design
//! Every failure is handed back to the caller. A non-200 response keeps its
//! raw status code and body so callers can decide whether to abort, retry, or
//! surface the server's message.

use thiserror::Error;

/// Errors returned by the request builder, transports, and dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The account identifier has no usable account number prefix.
    #[error("invalid account identifier: {0:?}")]
    InvalidAccount(String),

    /// DNS, connect, TLS, or body-read failure. No response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Status { status: u16, body: Vec<u8> },
}

impl ApiError {
    /// Status code of the response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let err = ApiError::Status {
            status: 401,
            body: b"unauthorized".to_vec(),
        };
        assert_eq!(err.to_string(), "HTTP 401: unauthorized");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
