// ── Backend resource catalogue ──
//
// Each content type lives under a fixed base path on the backend.
// Paths are not configurable; only the origin is.

use strum::{Display, EnumIter, IntoStaticStr};

/// A REST resource exposed by the content backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Resource {
    Videos,
    Gallery,
    About,
    PressRelease,
    Slider,
}

impl Resource {
    /// Base path relative to the backend origin, without trailing slash.
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Videos => "/api/videos",
            Self::Gallery => "/api/gallery",
            Self::About => "/api/about",
            Self::PressRelease => "/api/press-release",
            Self::Slider => "/api/slider",
        }
    }

    /// Human label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Videos => "Video",
            Self::Gallery => "Photo",
            Self::About => "About",
            Self::PressRelease => "Press release",
            Self::Slider => "Slide image",
        }
    }
}
