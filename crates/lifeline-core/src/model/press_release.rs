use lifeline_api::{RequestBody, Upload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{FieldMap, FieldRule, ID_SOURCES, lenient_opt_text, lenient_text};
use crate::draft::{self, DialogMode, Draft};
use crate::error::CoreError;

use super::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressRelease {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const FIELDS: FieldMap = FieldMap {
    id_sources: ID_SOURCES,
    rules: &[
        FieldRule::text("title", &["title"]),
        FieldRule::optional("imageUrl", &["image", "imageUrl"]),
        FieldRule::optional("publishDate", &["date", "publishDate"]),
    ],
    index_fallback: false,
    uploads: &[("image", "image")],
};

impl Entity for PressRelease {
    type Draft = PressReleaseDraft;

    const KIND: EntityKind = EntityKind::PressRelease;
    const FIELDS: &'static FieldMap = &FIELDS;

    fn id(&self) -> &str {
        &self.id
    }
}

// ── Draft ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressReleaseDraft {
    pub title: String,
    pub publish_date: String,
    pub image_url: String,
    pub image: Option<Upload>,
    pub preview: Option<String>,
}

impl Draft for PressReleaseDraft {
    type Entity = PressRelease;

    const TEXT_FIELDS: &'static [&'static str] = &["title", "publishDate", "imageUrl"];
    const FILE_FIELDS: &'static [&'static str] = &["image"];

    fn from_entity(entity: &PressRelease) -> Self {
        Self {
            title: entity.title.clone(),
            publish_date: entity.publish_date.clone().unwrap_or_default(),
            image_url: entity.image_url.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError> {
        match field {
            "title" => self.title = value,
            "publishDate" => self.publish_date = value,
            "imageUrl" => self.image_url = value,
            _ => return Err(draft::unknown_field::<PressRelease>(field, Self::TEXT_FIELDS)),
        }
        Ok(())
    }

    fn attach(&mut self, field: &str, upload: Upload, preview: String) -> Result<(), CoreError> {
        if field != "image" {
            return Err(draft::unknown_field::<PressRelease>(field, Self::FILE_FIELDS));
        }
        self.image = Some(upload);
        self.preview = Some(preview);
        Ok(())
    }

    fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn validate(&self, _mode: &DialogMode) -> Result<(), CoreError> {
        draft::require(
            "Please fill in all required fields: Title and Publish date",
            &[("title", &self.title), ("publishDate", &self.publish_date)],
        )
    }

    fn to_body(&self) -> RequestBody {
        RequestBody::choose(
            vec![
                ("title", self.title.clone()),
                ("date", self.publish_date.clone()),
                ("image", self.image_url.clone()),
            ],
            vec![
                ("title", self.title.clone()),
                ("date", self.publish_date.clone()),
            ],
            vec![("image", self.image.clone())],
        )
    }
}
