// ── Core error types ──
//
// User-facing errors from lifeline-core. Consumers never see raw HTTP
// or JSON failures; the `From<lifeline_api::Error>` impl translates
// transport-layer errors into the three domain kinds plus config.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Raised before any request ────────────────────────────────────
    /// A required identifier or field is missing.
    #[error("{message}")]
    Validation {
        message: String,
        /// Canonical names of the offending fields (empty for ids).
        fields: Vec<String>,
    },

    /// The action is not allowed in the page's current state.
    #[error("{message}")]
    InvalidState { message: String },

    // ── Raised by a backend ──────────────────────────────────────────
    /// The request completed but failed, or never completed.
    #[error("{message}")]
    Request {
        message: String,
        /// HTTP status code (if the server answered).
        status: Option<u16>,
    },

    /// The store no longer holds the targeted record.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub fn validation(message: impl Into<String>, fields: &[&str]) -> Self {
        Self::Validation {
            message: message.into(),
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<lifeline_api::Error> for CoreError {
    fn from(err: lifeline_api::Error) -> Self {
        let status = err.status();
        match err {
            lifeline_api::Error::MissingId(message) => CoreError::Validation {
                message,
                fields: vec!["id".into()],
            },
            lifeline_api::Error::Status { message, .. } => CoreError::Request { message, status },
            lifeline_api::Error::Timeout { timeout_secs } => CoreError::Request {
                message: format!("Request timed out after {timeout_secs}s"),
                status: None,
            },
            lifeline_api::Error::Transport(e) => CoreError::Request {
                status,
                message: if e.is_timeout() {
                    "Request timed out".into()
                } else if e.is_connect() {
                    format!(
                        "Cannot reach backend at {}",
                        e.url().map_or_else(|| "<unknown>".into(), ToString::to_string)
                    )
                } else {
                    e.to_string()
                },
            },
            lifeline_api::Error::Deserialization { message, body: _ } => CoreError::Request {
                message: format!("Unexpected response from server: {message}"),
                status: None,
            },
            lifeline_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            lifeline_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
        }
    }
}
