//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use lifeline_config::ConfigError;
use lifeline_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(unused_assignments)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(lifeline::validation),
        help("Missing: {fields}. Pass the matching flags and try again.")
    )]
    Validation { message: String, fields: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lifeline::invalid_value))]
    InvalidValue { field: String, reason: String },

    #[error("Could not read {path}")]
    #[diagnostic(code(lifeline::file_read), help("Check that the file exists and is readable."))]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(lifeline::request))]
    Request { message: String, status: Option<u16> },

    #[error("Could not reach the backend: {message}")]
    #[diagnostic(
        code(lifeline::connection_failed),
        help(
            "Check that the backend is running and the URL is right.\n\
             Override it with --api-url or: lifeline config set api_url <URL>"
        )
    )]
    ConnectionFailed { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(lifeline::timeout),
        help("Increase the timeout with --timeout or check backend responsiveness.")
    )]
    Timeout { message: String },

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(lifeline::not_found),
        help("Run: lifeline {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{message}")]
    #[diagnostic(code(lifeline::state))]
    State { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(lifeline::config),
        help("Inspect the resolved settings with: lifeline config show")
    )]
    Config { message: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(lifeline::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: lifeline config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(lifeline::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ─────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } | Self::Request { status: Some(404), .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::InvalidValue { .. }
            | Self::NonInteractiveRequiresYes { .. }
            | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message, fields } => Self::Validation {
                message,
                fields: if fields.is_empty() {
                    "(none)".into()
                } else {
                    fields.join(", ")
                },
            },
            CoreError::InvalidState { message } => Self::State { message },
            CoreError::Request { message, status } => {
                if status.is_none() && message.starts_with("Cannot reach backend") {
                    Self::ConnectionFailed { message }
                } else if status.is_none() && message.starts_with("Request timed out") {
                    Self::Timeout { message }
                } else {
                    Self::Request { message, status }
                }
            }
            CoreError::NotFound { entity, id } => Self::NotFound {
                list_command: list_command_for(&entity).into(),
                resource_type: entity,
                identifier: id,
            },
            CoreError::Config { message } => Self::Config { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::InvalidValue { field, reason },
            ConfigError::UnknownProfile { name } => Self::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

/// The `list` subcommand that shows records of the labelled kind.
fn list_command_for(label: &str) -> &'static str {
    match label {
        "Video" => "videos list",
        "Photo" => "gallery list",
        "About entry" => "about list",
        "Press release" => "press list",
        _ => "slides list",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_backend_maps_to_connection_exit_code() {
        let err: CliError = CoreError::Request {
            message: "Cannot reach backend at http://127.0.0.1:9/".into(),
            status: None,
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn not_found_names_the_list_command() {
        let err: CliError = CoreError::NotFound {
            entity: "Press release".into(),
            id: "p9".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        match err {
            CliError::NotFound { list_command, .. } => assert_eq!(list_command, "press list"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn validation_is_a_usage_error() {
        let err: CliError = CoreError::validation("Please select a photo", &["photo"]).into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert_eq!(err.to_string(), "Please select a photo");
    }
}
