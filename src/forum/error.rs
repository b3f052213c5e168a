//! Fetch error taxonomy.

use serde_json::Value;
use thiserror::Error;

/// Why a fetch did not produce data.
///
/// `Http` and `Request` are both network failures and are shown the same way.
/// `Shape` covers a successful response whose JSON lacks the expected fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The proxy answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },

    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Request(String),

    /// A 2xx response without the expected JSON shape.
    #[error("invalid data structure received")]
    Shape { expected: &'static str },
}

impl FetchError {
    /// Build an HTTP error from a proxy status and (optional) JSON body.
    ///
    /// The proxy reports failures as `{error, details}`; its `error` text is
    /// preferred over the generic status reason.
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(|b| b.get("error"))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                let reason = reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("Unknown status");
                format!("API Error: {}", reason)
            });
        FetchError::Http { status, message }
    }

    pub fn shape(expected: &'static str) -> Self {
        FetchError::Shape { expected }
    }

    /// True for failures that happened before or at the transport level.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Http { .. } | FetchError::Request(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}
