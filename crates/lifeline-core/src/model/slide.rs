use lifeline_api::{RequestBody, Upload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{FieldMap, FieldRule, ID_SOURCES, lenient_text};
use crate::draft::{self, DialogMode, Draft};
use crate::error::CoreError;

use super::{Entity, EntityKind};

/// A home-page carousel image.
///
/// The slider backend may omit identities; the record's list position
/// stands in, which is only stable until the list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideImage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const FIELDS: FieldMap = FieldMap {
    id_sources: ID_SOURCES,
    rules: &[FieldRule::text("imageUrl", &["imageUrl", "image"])],
    index_fallback: true,
    uploads: &[("image", "image")],
};

impl Entity for SlideImage {
    type Draft = SlideDraft;

    const KIND: EntityKind = EntityKind::SlideImage;
    const FIELDS: &'static FieldMap = &FIELDS;

    fn id(&self) -> &str {
        &self.id
    }
}

// ── Draft ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideDraft {
    pub image_url: String,
    pub image: Option<Upload>,
    pub preview: Option<String>,
}

impl Draft for SlideDraft {
    type Entity = SlideImage;

    const TEXT_FIELDS: &'static [&'static str] = &["imageUrl"];
    const FILE_FIELDS: &'static [&'static str] = &["image"];

    fn from_entity(entity: &SlideImage) -> Self {
        Self {
            image_url: entity.image_url.clone(),
            ..Self::default()
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError> {
        if field == "imageUrl" {
            self.image_url = value;
            Ok(())
        } else {
            Err(draft::unknown_field::<SlideImage>(field, Self::TEXT_FIELDS))
        }
    }

    fn attach(&mut self, field: &str, upload: Upload, preview: String) -> Result<(), CoreError> {
        if field != "image" {
            return Err(draft::unknown_field::<SlideImage>(field, Self::FILE_FIELDS));
        }
        self.image = Some(upload);
        self.preview = Some(preview);
        Ok(())
    }

    fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn validate(&self, mode: &DialogMode) -> Result<(), CoreError> {
        if mode.is_add() && self.image.is_none() {
            return Err(CoreError::validation("Please select an image", &["image"]));
        }
        Ok(())
    }

    fn to_body(&self) -> RequestBody {
        RequestBody::choose(
            vec![("image", self.image_url.clone())],
            Vec::new(),
            vec![("image", self.image.clone())],
        )
    }
}
