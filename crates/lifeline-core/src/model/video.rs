use lifeline_api::{RequestBody, Upload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{FieldMap, FieldRule, ID_SOURCES, lenient_opt_text, lenient_text};
use crate::draft::{self, DialogMode, Draft};
use crate::error::CoreError;

use super::{Entity, EntityKind};

/// A video with an optional thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_url: Option<String>,
    /// Thumbnail reference.
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const FIELDS: FieldMap = FieldMap {
    id_sources: ID_SOURCES,
    rules: &[
        FieldRule::text("title", &["title"]),
        FieldRule::optional("description", &["subtitle", "description"]),
        FieldRule::optional("videoUrl", &["videourl", "video", "videoUrl", "url"]),
        FieldRule::optional("image", &["image"]),
    ],
    index_fallback: false,
    uploads: &[("image", "image"), ("video", "videourl")],
};

impl Entity for Video {
    type Draft = VideoDraft;

    const KIND: EntityKind = EntityKind::Video;
    const FIELDS: &'static FieldMap = &FIELDS;

    fn id(&self) -> &str {
        &self.id
    }
}

// ── Draft ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub image_url: String,
    pub video_file: Option<Upload>,
    pub image_file: Option<Upload>,
    pub preview: Option<String>,
}

impl VideoDraft {
    /// Multipart text parts. A reference is sent only when no file replaces it.
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("subtitle", self.description.clone()),
        ];
        if self.video_file.is_none() {
            fields.push(("videourl", self.video_url.clone()));
        }
        if self.image_file.is_none() {
            fields.push(("image", self.image_url.clone()));
        }
        fields
    }
}

impl Draft for VideoDraft {
    type Entity = Video;

    const TEXT_FIELDS: &'static [&'static str] = &["title", "description", "videoUrl", "image"];
    const FILE_FIELDS: &'static [&'static str] = &["image", "video"];

    fn from_entity(entity: &Video) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone().unwrap_or_default(),
            video_url: entity.video_url.clone().unwrap_or_default(),
            image_url: entity.image.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError> {
        match field {
            "title" => self.title = value,
            "description" => self.description = value,
            "videoUrl" => self.video_url = value,
            "image" => self.image_url = value,
            _ => return Err(draft::unknown_field::<Video>(field, Self::TEXT_FIELDS)),
        }
        Ok(())
    }

    fn attach(&mut self, field: &str, upload: Upload, preview: String) -> Result<(), CoreError> {
        match field {
            "image" => self.image_file = Some(upload),
            "video" => self.video_file = Some(upload),
            _ => return Err(draft::unknown_field::<Video>(field, Self::FILE_FIELDS)),
        }
        self.preview = Some(preview);
        Ok(())
    }

    fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn validate(&self, _mode: &DialogMode) -> Result<(), CoreError> {
        draft::require(
            "Please fill in all required fields: Title and Description",
            &[("title", &self.title), ("description", &self.description)],
        )
    }

    fn to_body(&self) -> RequestBody {
        RequestBody::choose(
            vec![
                ("title", self.title.clone()),
                ("subtitle", self.description.clone()),
                ("videourl", self.video_url.clone()),
                ("image", self.image_url.clone()),
            ],
            self.form_fields(),
            vec![
                ("image", self.image_file.clone()),
                ("video", self.video_file.clone()),
            ],
        )
    }
}
