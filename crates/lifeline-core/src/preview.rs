// ── File previews ──
//
// The presentation layer decides how a selected file is previewed. The
// core only stores the locator it hands back and never uploads it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use lifeline_api::Upload;

/// Produces a displayable locator for a selected file.
pub trait PreviewProvider: Send + Sync {
    fn preview(&self, upload: &Upload) -> String;
}

impl<F> PreviewProvider for F
where
    F: Fn(&Upload) -> String + Send + Sync,
{
    fn preview(&self, upload: &Upload) -> String {
        self(upload)
    }
}

/// Inline `data:` URL preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlPreview;

impl PreviewProvider for DataUrlPreview {
    fn preview(&self, upload: &Upload) -> String {
        format!("data:{};base64,{}", upload.mime_type, STANDARD.encode(&upload.data))
    }
}
