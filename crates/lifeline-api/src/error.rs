use thiserror::Error;

/// Friendly text for a 404 from a resource endpoint.
pub const NOT_FOUND_MESSAGE: &str =
    "API endpoint not found. Please check if the backend endpoint is configured correctly.";

/// Friendly text for a 500 from a resource endpoint.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Top-level error type for the `lifeline-api` crate.
///
/// Covers every failure mode of the REST surface: transport, URL
/// construction, HTTP status, and body decoding. `lifeline-core` maps
/// these into user-facing domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Request ─────────────────────────────────────────────────────
    /// A required identifier was empty; no request was sent.
    #[error("{0}")]
    MissingId(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` is already derived: server-supplied `message` field,
    /// then friendly status text, then the raw status line.
    #[error("{message}")]
    Status { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 404,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Derive the user-facing message for a failed response.
///
/// Preference order: the body's `message` field, friendly text for 404
/// and 500, then `HTTP {code} {reason}`.
pub fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    let server_message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .filter(|m| !m.trim().is_empty());

    if let Some(message) = server_message {
        return message;
    }

    match status.as_u16() {
        404 => NOT_FOUND_MESSAGE.to_owned(),
        500 => SERVER_ERROR_MESSAGE.to_owned(),
        code => match status.canonical_reason() {
            Some(reason) => format!("HTTP {code} {reason}"),
            None => format!("HTTP {code}"),
        },
    }
}
