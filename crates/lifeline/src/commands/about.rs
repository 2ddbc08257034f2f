//! About-page command handlers.

use tabled::Tabled;

use lifeline_core::{AboutEntry, Controller};

use crate::cli::{AboutArgs, AboutCommand, AboutFields, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::crud::{self, Edits, View};

#[derive(Tabled)]
pub struct AboutRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Designation")]
    designation: String,
    #[tabled(rename = "Mobile")]
    mobile: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl View for AboutEntry {
    type Row = AboutRow;

    fn row(&self) -> AboutRow {
        AboutRow {
            id: self.id.clone(),
            name: self.name.clone(),
            designation: self.designation.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
        }
    }

    fn detail(&self) -> String {
        output::detail_lines(&[
            ("ID:", self.id.as_str()),
            ("Name:", self.name.as_str()),
            ("Designation:", self.designation.as_str()),
            ("Mobile:", self.mobile.as_str()),
            ("Email:", self.email.as_str()),
            ("Image:", self.image.as_str()),
        ])
    }
}

fn edits(fields: AboutFields) -> Edits {
    Edits::default()
        .text("name", fields.name)
        .text("designation", fields.designation)
        .text("mobile", fields.mobile)
        .text("email", fields.email)
        .file("image", fields.image)
}

pub async fn handle(
    controller: &Controller,
    args: AboutArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AboutCommand::List => crud::list::<AboutEntry>(controller, global).await,
        AboutCommand::Get { id } => crud::get::<AboutEntry>(controller, &id, global).await,
        AboutCommand::Add(fields) => {
            crud::add::<AboutEntry>(controller, edits(fields), global).await
        }
        AboutCommand::Edit { id, fields } => {
            crud::edit::<AboutEntry>(controller, &id, edits(fields), global).await
        }
        AboutCommand::Delete { id } => crud::delete::<AboutEntry>(controller, &id, global).await,
    }
}
