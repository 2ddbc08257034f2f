//! Video command handlers.

use tabled::Tabled;

use lifeline_core::{Controller, Video};

use crate::cli::{GlobalOpts, VideoFields, VideosArgs, VideosCommand};
use crate::error::CliError;
use crate::output;

use super::crud::{self, Edits, View};
use super::util::or_dash;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct VideoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Video")]
    video_url: String,
    #[tabled(rename = "Thumbnail")]
    image: String,
}

impl View for Video {
    type Row = VideoRow;

    fn row(&self) -> VideoRow {
        VideoRow {
            id: self.id.clone(),
            title: self.title.clone(),
            description: or_dash(self.description.as_deref()),
            video_url: or_dash(self.video_url.as_deref()),
            image: or_dash(self.image.as_deref()),
        }
    }

    fn detail(&self) -> String {
        output::detail_lines(&[
            ("ID:", self.id.as_str()),
            ("Title:", self.title.as_str()),
            ("Description:", self.description.as_deref().unwrap_or_default()),
            ("Video:", self.video_url.as_deref().unwrap_or_default()),
            ("Thumbnail:", self.image.as_deref().unwrap_or_default()),
        ])
    }
}

fn edits(fields: VideoFields) -> Edits {
    Edits::default()
        .text("title", fields.title)
        .text("description", fields.description)
        .text("videoUrl", fields.video_url)
        .text("image", fields.image_url)
        .file("video", fields.video)
        .file("image", fields.thumbnail)
}

pub async fn handle(
    controller: &Controller,
    args: VideosArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VideosCommand::List => crud::list::<Video>(controller, global).await,
        VideosCommand::Get { id } => crud::get::<Video>(controller, &id, global).await,
        VideosCommand::Add(fields) => crud::add::<Video>(controller, edits(fields), global).await,
        VideosCommand::Edit { id, fields } => {
            crud::edit::<Video>(controller, &id, edits(fields), global).await
        }
        VideosCommand::Delete { id } => crud::delete::<Video>(controller, &id, global).await,
    }
}
