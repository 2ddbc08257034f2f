// ── Drafts ──
//
// In-progress edit state behind an add/edit dialog. A draft knows its
// entity's required fields and how to encode itself for the wire; the
// page owns when those happen.

use std::fmt;

use lifeline_api::{RequestBody, Upload};

use crate::error::CoreError;
use crate::model::Entity;

/// Whether a dialog creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit { id: String },
}

impl DialogMode {
    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add)
    }
}

/// Editable state for one entity type.
pub trait Draft: Clone + fmt::Debug + Default + Send + Sync + 'static {
    type Entity: Entity;

    /// Canonical names accepted by [`set_field`](Self::set_field).
    const TEXT_FIELDS: &'static [&'static str];

    /// Part names accepted by [`attach`](Self::attach).
    const FILE_FIELDS: &'static [&'static str];

    /// Seed a draft from an existing record, carrying its references forward.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Replace one text field, leaving every other field untouched.
    fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError>;

    /// Attach a file and remember its preview locator.
    fn attach(&mut self, field: &str, upload: Upload, preview: String) -> Result<(), CoreError>;

    /// Preview locator of the most recently attached file.
    fn preview(&self) -> Option<&str>;

    /// Check required fields for the dialog mode.
    fn validate(&self, mode: &DialogMode) -> Result<(), CoreError>;

    /// Encode for the wire: multipart when a file is attached, JSON otherwise.
    fn to_body(&self) -> RequestBody;
}

// ── Shared helpers for draft implementations ───────────────────────

/// Rejects a field name, listing the names `E`'s draft accepts in its place.
pub(crate) fn unknown_field<E: Entity>(field: &str, expected: &[&str]) -> CoreError {
    CoreError::validation(
        format!(
            "Unknown field '{field}' for {}; expected one of: {}",
            E::KIND.label().to_lowercase(),
            expected.join(", ")
        ),
        &[],
    )
}

/// Fail with `message` if any `(name, value)` pair is blank.
pub(crate) fn require(message: &str, fields: &[(&str, &str)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(message, &missing))
    }
}
