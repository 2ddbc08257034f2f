use lifeline_api::{RequestBody, Upload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{FieldMap, FieldRule, ID_SOURCES, lenient_text};
use crate::draft::{self, DialogMode, Draft};
use crate::error::CoreError;

use super::{Entity, EntityKind};

/// A team member shown on the about page.
///
/// Every text field is present after normalization, empty when the
/// backend omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub designation: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const FIELDS: FieldMap = FieldMap {
    id_sources: ID_SOURCES,
    rules: &[
        FieldRule::text("name", &["name"]),
        FieldRule::text("image", &["image"]),
        FieldRule::text("designation", &["designation"]),
        FieldRule::text("mobile", &["mobile"]),
        FieldRule::text("email", &["email"]),
    ],
    index_fallback: false,
    uploads: &[("image", "image")],
};

impl Entity for AboutEntry {
    type Draft = AboutDraft;

    const KIND: EntityKind = EntityKind::About;
    const FIELDS: &'static FieldMap = &FIELDS;

    fn id(&self) -> &str {
        &self.id
    }
}

// ── Draft ──────────────────────────────────────────────────────────

const REQUIRED_MESSAGE: &str =
    "Please fill in all required fields: Name, Designation, Mobile, and Email";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutDraft {
    pub name: String,
    pub designation: String,
    pub mobile: String,
    pub email: String,
    /// Existing image reference, sent back unchanged when no file is picked.
    pub image_url: String,
    pub image: Option<Upload>,
    pub preview: Option<String>,
}

impl Draft for AboutDraft {
    type Entity = AboutEntry;

    const TEXT_FIELDS: &'static [&'static str] =
        &["name", "designation", "mobile", "email", "image"];
    const FILE_FIELDS: &'static [&'static str] = &["image"];

    fn from_entity(entity: &AboutEntry) -> Self {
        Self {
            name: entity.name.clone(),
            designation: entity.designation.clone(),
            mobile: entity.mobile.clone(),
            email: entity.email.clone(),
            image_url: entity.image.clone(),
            ..Self::default()
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError> {
        match field {
            "name" => self.name = value,
            "designation" => self.designation = value,
            "mobile" => self.mobile = value,
            "email" => self.email = value,
            "image" => self.image_url = value,
            _ => return Err(draft::unknown_field::<AboutEntry>(field, Self::TEXT_FIELDS)),
        }
        Ok(())
    }

    fn attach(&mut self, field: &str, upload: Upload, preview: String) -> Result<(), CoreError> {
        if field != "image" {
            return Err(draft::unknown_field::<AboutEntry>(field, Self::FILE_FIELDS));
        }
        self.image = Some(upload);
        self.preview = Some(preview);
        Ok(())
    }

    fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn validate(&self, mode: &DialogMode) -> Result<(), CoreError> {
        draft::require(
            REQUIRED_MESSAGE,
            &[
                ("name", &self.name),
                ("designation", &self.designation),
                ("mobile", &self.mobile),
                ("email", &self.email),
            ],
        )?;
        if mode.is_add() && self.image.is_none() {
            return Err(CoreError::validation("Please select an image", &["image"]));
        }
        Ok(())
    }

    fn to_body(&self) -> RequestBody {
        RequestBody::choose(
            vec![
                ("name", self.name.clone()),
                ("image", self.image_url.clone()),
                ("designation", self.designation.clone()),
                ("mobile", self.mobile.clone()),
                ("email", self.email.clone()),
            ],
            vec![
                ("name", self.name.clone()),
                ("designation", self.designation.clone()),
                ("mobile", self.mobile.clone()),
                ("email", self.email.clone()),
            ],
            vec![("image", self.image.clone())],
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> AboutDraft {
        AboutDraft {
            name: "Asha".into(),
            designation: "Director".into(),
            mobile: "555-0100".into(),
            email: "asha@example.org".into(),
            ..AboutDraft::default()
        }
    }

    #[test]
    fn name_only_lists_every_other_required_field() {
        let draft = AboutDraft {
            name: "Asha".into(),
            ..AboutDraft::default()
        };
        match draft.validate(&DialogMode::Add) {
            Err(CoreError::Validation { message, fields }) => {
                assert_eq!(message, REQUIRED_MESSAGE);
                assert_eq!(fields, vec!["designation", "mobile", "email"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_also_needs_an_image() {
        let err = filled().validate(&DialogMode::Add).unwrap_err();
        assert_eq!(err.to_string(), "Please select an image");
        assert!(filled().validate(&DialogMode::Edit { id: "a1".into() }).is_ok());
    }

    #[test]
    fn json_body_carries_image_reference() {
        let mut draft = filled();
        draft.image_url = "http://x/a.png".into();
        let body = draft.to_body();
        assert!(!body.is_multipart());
        assert_eq!(body.field("image"), Some("http://x/a.png"));
        assert_eq!(body.field("email"), Some("asha@example.org"));
    }

    #[test]
    fn multipart_body_replaces_reference_with_file() {
        let mut draft = filled();
        draft.image_url = "http://x/a.png".into();
        draft
            .attach("image", Upload::new("a.png", "image/png", vec![1]), "p".into())
            .unwrap();
        let body = draft.to_body();
        assert!(body.is_multipart());
        assert_eq!(body.field("image"), None);
        assert_eq!(body.field("mobile"), Some("555-0100"));
        assert!(body.file("image").is_some());
    }
}
