// ── Domain model ──
//
// Canonical, post-normalization shapes for the five content types.
// Each struct keeps every raw backend field in `extra`, so serializing
// an entity yields canonical fields alongside the originals.

pub mod about;
pub mod gallery;
pub mod press_release;
pub mod slide;
pub mod video;

use std::fmt;

use lifeline_api::Resource;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, EnumIter};

use crate::convert::FieldMap;
use crate::draft::Draft;

pub use about::{AboutDraft, AboutEntry};
pub use gallery::{GalleryDraft, GalleryPhoto};
pub use press_release::{PressRelease, PressReleaseDraft};
pub use slide::{SlideDraft, SlideImage};
pub use video::{Video, VideoDraft};

/// The content types managed by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EntityKind {
    Video,
    Gallery,
    About,
    PressRelease,
    SlideImage,
}

impl EntityKind {
    pub fn resource(self) -> Resource {
        match self {
            Self::Video => Resource::Videos,
            Self::Gallery => Resource::Gallery,
            Self::About => Resource::About,
            Self::PressRelease => Resource::PressRelease,
            Self::SlideImage => Resource::Slider,
        }
    }

    /// Singular label used in feedback ("About entry added successfully").
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Gallery => "Photo",
            Self::About => "About entry",
            Self::PressRelease => "Press release",
            Self::SlideImage => "Slide image",
        }
    }

    /// Plural, lowercase ("Failed to fetch about entries").
    pub fn plural(self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::Gallery => "photos",
            Self::About => "about entries",
            Self::PressRelease => "press releases",
            Self::SlideImage => "slide images",
        }
    }
}

/// A content type the admin can list, edit, and delete.
pub trait Entity:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Draft<Entity = Self>;

    const KIND: EntityKind;
    const FIELDS: &'static FieldMap;

    /// Canonical identity; empty only when the backend sent none.
    fn id(&self) -> &str;
}
