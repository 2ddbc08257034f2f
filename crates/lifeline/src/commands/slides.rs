//! Slider image command handlers.

use tabled::Tabled;

use lifeline_core::{Controller, SlideImage};

use crate::cli::{GlobalOpts, SlideFields, SlidesArgs, SlidesCommand};
use crate::error::CliError;
use crate::output;

use super::crud::{self, Edits, View};

#[derive(Tabled)]
pub struct SlideRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Image")]
    image_url: String,
}

impl View for SlideImage {
    type Row = SlideRow;

    fn row(&self) -> SlideRow {
        SlideRow {
            id: self.id.clone(),
            image_url: self.image_url.clone(),
        }
    }

    fn detail(&self) -> String {
        output::detail_lines(&[("ID:", self.id.as_str()), ("Image:", self.image_url.as_str())])
    }
}

fn edits(fields: SlideFields) -> Edits {
    Edits::default()
        .text("imageUrl", fields.image_url)
        .file("image", fields.image)
}

pub async fn handle(
    controller: &Controller,
    args: SlidesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SlidesCommand::List => crud::list::<SlideImage>(controller, global).await,
        SlidesCommand::Get { id } => crud::get::<SlideImage>(controller, &id, global).await,
        SlidesCommand::Add(fields) => {
            crud::add::<SlideImage>(controller, edits(fields), global).await
        }
        SlidesCommand::Edit { id, fields } => {
            crud::edit::<SlideImage>(controller, &id, edits(fields), global).await
        }
        SlidesCommand::Delete { id } => crud::delete::<SlideImage>(controller, &id, global).await,
    }
}
