// ── Request bodies ──
//
// A mutation is sent either as a JSON object or as multipart form data.
// Multipart is used exactly when at least one binary file is attached.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use crate::error::Error;

/// A binary file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Body of a create/update request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `Content-Type: application/json` object.
    Json(Map<String, Value>),
    /// One text part per attribute plus one part per attached file.
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<(String, Upload)>,
    },
}

impl RequestBody {
    /// Build a body from text fields and optional files.
    ///
    /// Picks multipart when any file is present, JSON otherwise. The JSON
    /// form carries `json_fields`; the multipart form carries
    /// `form_fields`, which omit reference fields the file parts replace.
    pub fn choose(
        json_fields: Vec<(&str, String)>,
        form_fields: Vec<(&str, String)>,
        files: Vec<(&str, Option<Upload>)>,
    ) -> Self {
        let files: Vec<(String, Upload)> = files
            .into_iter()
            .filter_map(|(name, upload)| upload.map(|u| (name.to_owned(), u)))
            .collect();

        if files.is_empty() {
            let map = json_fields
                .into_iter()
                .map(|(k, v)| (k.to_owned(), Value::String(v)))
                .collect();
            Self::Json(map)
        } else {
            Self::Multipart {
                fields: form_fields
                    .into_iter()
                    .map(|(k, v)| (k.to_owned(), v))
                    .collect(),
                files,
            }
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }

    /// Text value of a field, regardless of encoding.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Json(map) => map.get(name).and_then(Value::as_str),
            Self::Multipart { fields, .. } => fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// Attached file for a part name (multipart only).
    pub fn file(&self, name: &str) -> Option<&Upload> {
        match self {
            Self::Json(_) => None,
            Self::Multipart { files, .. } => {
                files.iter().find(|(k, _)| k == name).map(|(_, u)| u)
            }
        }
    }

    pub(crate) fn into_form(self) -> Result<Form, Error> {
        let Self::Multipart { fields, files } = self else {
            return Ok(Form::new());
        };

        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        for (name, upload) in files {
            let part = Part::bytes(upload.data.to_vec())
                .file_name(upload.file_name)
                .mime_str(&upload.mime_type)?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}
