//! Gallery command handlers.

use tabled::Tabled;

use lifeline_core::{Controller, GalleryPhoto};

use crate::cli::{GalleryArgs, GalleryCommand, GlobalOpts, PhotoFields};
use crate::error::CliError;
use crate::output;

use super::crud::{self, Edits, View};
use super::util::or_dash;

#[derive(Tabled)]
pub struct PhotoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Photo")]
    photo_url: String,
    #[tabled(rename = "Uploaded")]
    created_at: String,
}

impl View for GalleryPhoto {
    type Row = PhotoRow;

    fn row(&self) -> PhotoRow {
        PhotoRow {
            id: self.id.clone(),
            photo_url: or_dash(self.photo_url.as_deref()),
            created_at: or_dash(self.created_at.as_deref()),
        }
    }

    fn detail(&self) -> String {
        output::detail_lines(&[
            ("ID:", self.id.as_str()),
            ("Photo:", self.photo_url.as_deref().unwrap_or_default()),
            ("Uploaded:", self.created_at.as_deref().unwrap_or_default()),
            ("Updated:", self.updated_at.as_deref().unwrap_or_default()),
        ])
    }
}

fn edits(fields: PhotoFields) -> Edits {
    Edits::default()
        .text("photoUrl", fields.photo_url)
        .file("photo", fields.photo)
}

pub async fn handle(
    controller: &Controller,
    args: GalleryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GalleryCommand::List => crud::list::<GalleryPhoto>(controller, global).await,
        GalleryCommand::Get { id } => crud::get::<GalleryPhoto>(controller, &id, global).await,
        GalleryCommand::Add(fields) => {
            crud::add::<GalleryPhoto>(controller, edits(fields), global).await
        }
        GalleryCommand::Edit { id, fields } => {
            crud::edit::<GalleryPhoto>(controller, &id, edits(fields), global).await
        }
        GalleryCommand::Delete { id } => {
            crud::delete::<GalleryPhoto>(controller, &id, global).await
        }
    }
}
