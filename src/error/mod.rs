//! Typed error taxonomy for every operation that crosses the network.
//!
//! Raw transport outcomes (no response, timeout, structured error body) are
//! classified into an [`ApiError`] exactly once, at the client boundary.
//! Nothing past that boundary ever sees a raw `reqwest::Error`.

pub mod translate;

pub use translate::MessageCatalog;

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Machine-readable error code.
///
/// Codes the backend returns in an error body are passed through verbatim as
/// [`ErrorCode::Backend`]; the remaining variants are produced client-side
/// when no usable response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The client has no connectivity.
    NetworkError,
    /// The request exceeded its deadline.
    TimeoutError,
    /// No response was received, cause unknown.
    ServerUnavailable,
    /// A response arrived but carried no usable error code.
    InternalServerError,
    /// Verbatim code from the backend error body.
    Backend(String),
}

impl ErrorCode {
    /// Canonical wire form, e.g. `"NETWORK_ERROR"` or the backend code as-is.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::TimeoutError => "TIMEOUT_ERROR",
            Self::ServerUnavailable => "SERVER_UNAVAILABLE",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::Backend(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "NETWORK_ERROR" => Self::NetworkError,
            "TIMEOUT_ERROR" => Self::TimeoutError,
            "SERVER_UNAVAILABLE" => Self::ServerUnavailable,
            "INTERNAL_SERVER_ERROR" => Self::InternalServerError,
            other => Self::Backend(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed API failure exposed to callers.
///
/// `status_code` is the HTTP status of the failing response, or `0` when no
/// response was received at all. `context` carries structured detail (such as
/// the transport error text) without leaking it into the display message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code} (status {status_code}): {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub status_code: u16,
    pub context: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status_code,
            context: None,
        }
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Classify a failure where no response was received.
    ///
    /// First match wins: offline, then timeout, then unavailable. `detail`
    /// is the transport error text; it lands in `context`, not the message.
    pub fn no_response(offline: bool, timed_out: bool, detail: &str) -> Self {
        let error = if offline {
            Self::new(ErrorCode::NetworkError, "no network connection", 0)
        } else if timed_out {
            Self::new(ErrorCode::TimeoutError, "the request timed out", 0)
        } else {
            Self::new(ErrorCode::ServerUnavailable, "the server could not be reached", 0)
        };
        error.with_context(serde_json::json!({ "source": detail }))
    }

    /// Classify a non-success response from its status and raw body.
    ///
    /// A structured `{code, message}` body is passed through verbatim;
    /// anything else degrades to `INTERNAL_SERVER_ERROR`.
    pub fn from_response(status_code: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody {
                code: Some(code),
                message,
            }) => Self::new(
                ErrorCode::from(code),
                message.unwrap_or_else(|| "the server reported an error".to_string()),
                status_code,
            ),
            _ => Self::new(
                ErrorCode::InternalServerError,
                "the server reported an unexpected error",
                status_code,
            ),
        }
    }
}

/// Structured error body the backend is expected to return.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Outcome of every network-crossing operation.
pub type Result<T> = std::result::Result<T, ApiError>;
