use lifeline_api::{RequestBody, Upload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{FieldMap, FieldRule, ID_SOURCES, lenient_opt_text, lenient_text};
use crate::draft::{self, DialogMode, Draft};
use crate::error::CoreError;

use super::{Entity, EntityKind};

/// A photo in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const FIELDS: FieldMap = FieldMap {
    id_sources: ID_SOURCES,
    rules: &[
        FieldRule::optional("photoUrl", &["photoUrl"]),
        FieldRule::optional("createdAt", &["createdAt"]),
        FieldRule::optional("updatedAt", &["updatedAt"]),
    ],
    index_fallback: false,
    uploads: &[("photo", "photoUrl")],
};

impl Entity for GalleryPhoto {
    type Draft = GalleryDraft;

    const KIND: EntityKind = EntityKind::Gallery;
    const FIELDS: &'static FieldMap = &FIELDS;

    fn id(&self) -> &str {
        &self.id
    }
}

// ── Draft ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryDraft {
    pub photo_url: String,
    pub photo: Option<Upload>,
    pub preview: Option<String>,
}

impl Draft for GalleryDraft {
    type Entity = GalleryPhoto;

    const TEXT_FIELDS: &'static [&'static str] = &["photoUrl"];
    const FILE_FIELDS: &'static [&'static str] = &["photo"];

    fn from_entity(entity: &GalleryPhoto) -> Self {
        Self {
            photo_url: entity.photo_url.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError> {
        if field == "photoUrl" {
            self.photo_url = value;
            Ok(())
        } else {
            Err(draft::unknown_field::<GalleryPhoto>(field, Self::TEXT_FIELDS))
        }
    }

    fn attach(&mut self, field: &str, upload: Upload, preview: String) -> Result<(), CoreError> {
        if field != "photo" {
            return Err(draft::unknown_field::<GalleryPhoto>(field, Self::FILE_FIELDS));
        }
        self.photo = Some(upload);
        self.preview = Some(preview);
        Ok(())
    }

    fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn validate(&self, mode: &DialogMode) -> Result<(), CoreError> {
        if mode.is_add() && self.photo.is_none() {
            return Err(CoreError::validation("Please select a photo", &["photo"]));
        }
        Ok(())
    }

    fn to_body(&self) -> RequestBody {
        RequestBody::choose(
            vec![("photoUrl", self.photo_url.clone())],
            Vec::new(),
            vec![("photo", self.photo.clone())],
        )
    }
}
