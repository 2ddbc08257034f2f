//! Shared helpers for command handlers.

use std::io::{self, IsTerminal};
use std::path::Path;

use lifeline_core::Upload;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// A failed prompt counts as "no".
pub fn confirm(message: &str, yes_flag: bool) -> bool {
    if yes_flag {
        return true;
    }
    match dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
    {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(error = %e, "confirmation prompt failed");
            false
        }
    }
}

/// Refuse destructive actions when nobody can answer the prompt.
pub fn ensure_can_confirm(action: &str, yes_flag: bool) -> Result<(), CliError> {
    if yes_flag || io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        })
    }
}

/// Read a local file into an upload, guessing its MIME type from the extension.
pub fn read_upload(path: &Path) -> Result<Upload, CliError> {
    let data = std::fs::read(path).map_err(|source| CliError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".into(), |name| name.to_string_lossy().into_owned());
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    tracing::debug!(file = %file_name, mime = %mime, bytes = data.len(), "read upload");
    Ok(Upload::new(file_name, mime.essence_str(), data))
}

/// `-` for absent values in table cells.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "-".into(),
    }
}
