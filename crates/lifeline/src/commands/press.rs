//! Press release command handlers.

use tabled::Tabled;

use lifeline_core::{Controller, PressRelease};

use crate::cli::{GlobalOpts, PressArgs, PressCommand, PressFields};
use crate::error::CliError;
use crate::output;

use super::crud::{self, Edits, View};
use super::util::or_dash;

#[derive(Tabled)]
pub struct PressRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Published")]
    publish_date: String,
    #[tabled(rename = "Image")]
    image_url: String,
}

impl View for PressRelease {
    type Row = PressRow;

    fn row(&self) -> PressRow {
        PressRow {
            id: self.id.clone(),
            title: self.title.clone(),
            publish_date: or_dash(self.publish_date.as_deref()),
            image_url: or_dash(self.image_url.as_deref()),
        }
    }

    fn detail(&self) -> String {
        output::detail_lines(&[
            ("ID:", self.id.as_str()),
            ("Title:", self.title.as_str()),
            ("Published:", self.publish_date.as_deref().unwrap_or_default()),
            ("Image:", self.image_url.as_deref().unwrap_or_default()),
        ])
    }
}

fn edits(fields: PressFields) -> Edits {
    Edits::default()
        .text("title", fields.title)
        .text("publishDate", fields.date)
        .text("imageUrl", fields.image_url)
        .file("image", fields.image)
}

pub async fn handle(
    controller: &Controller,
    args: PressArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PressCommand::List => crud::list::<PressRelease>(controller, global).await,
        PressCommand::Get { id } => crud::get::<PressRelease>(controller, &id, global).await,
        PressCommand::Add(fields) => {
            crud::add::<PressRelease>(controller, edits(fields), global).await
        }
        PressCommand::Edit { id, fields } => {
            crud::edit::<PressRelease>(controller, &id, edits(fields), global).await
        }
        PressCommand::Delete { id } => crud::delete::<PressRelease>(controller, &id, global).await,
    }
}
