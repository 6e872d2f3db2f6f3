//! Error types for the PingAccess SDK.
//!
//! # Design
//! 401 and 403 get fixed variants because the server's body on those codes is
//! never inspected. Every other non-2xx response is either a structured
//! `FailureResponse` (`Api`) or, when the body is not that shape, kept as raw
//! text in `UnparsableResponse` so the server's diagnostics survive.
//!
//! `ApiError` is `Clone` so a `Request` can keep the last error it produced
//! while also returning it to the caller.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by `Request::send` and by every service call.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request body could not be serialized to JSON. Nothing was sent.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The configured endpoint plus the operation path is not a valid URL.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No response was received (DNS, connection refused, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server returned 401.
    #[error("unauthorized")]
    Unauthorized,

    /// The server returned 403.
    #[error("forbidden")]
    Forbidden,

    /// A non-2xx response carrying the server's `form`/`flash` error body.
    #[error("{failure}")]
    Api { status: u16, failure: FailureResponse },

    /// A non-2xx response whose body is not a `FailureResponse`.
    #[error("HTTP {status}: {body}")]
    UnparsableResponse { status: u16, body: String },

    /// A 2xx body that could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ApiError::Transport(Arc::new(err))
    }

    /// HTTP status code behind this error, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::Api { status, .. } | ApiError::UnparsableResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Body of a PingAccess error response.
///
/// `form` maps a field name to its validation messages; `flash` holds
/// top-level messages. Both may be absent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    #[serde(default)]
    pub form: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub flash: Vec<String>,
}

impl fmt::Display for FailureResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flash.join(", "))?;
        for (field, messages) in &self.form {
            write!(
                f,
                "\n{field} contains {} validation failures:",
                messages.len()
            )?;
            for message in messages {
                write!(f, "\n\t{message}")?;
            }
        }
        Ok(())
    }
}
