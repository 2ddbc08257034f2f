//! Generic list/get/add/edit/delete over a `CrudPage`.
//!
//! Each content module supplies a [`View`] for its entity and maps its
//! flags into [`Edits`]; everything else is shared.

use std::path::PathBuf;
use std::sync::Arc;

use tabled::Tabled;

use lifeline_core::{Controller, CrudPage, DataUrlPreview, Entity, Repository};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

/// How an entity renders in tables and detail views.
pub trait View: Entity {
    type Row: Tabled;

    fn row(&self) -> Self::Row;

    fn detail(&self) -> String;
}

// ── Edits ───────────────────────────────────────────────────────────

/// Field values and file paths from the command line, applied to a draft.
#[derive(Debug, Default)]
pub struct Edits {
    fields: Vec<(&'static str, String)>,
    files: Vec<(&'static str, PathBuf)>,
}

impl Edits {
    pub fn text(mut self, field: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.fields.push((field, value));
        }
        self
    }

    pub fn file(mut self, field: &'static str, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.files.push((field, path));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }

    fn apply<E: Entity>(self, page: &mut CrudPage<E>) -> Result<(), CliError> {
        for (field, value) in self.fields {
            page.set_field(field, value)?;
        }
        for (field, path) in self.files {
            let upload = util::read_upload(&path)?;
            page.select_file(field, upload)?;
        }
        Ok(())
    }
}

// ── Handlers ────────────────────────────────────────────────────────

fn new_page<E: Entity>(controller: &Controller) -> CrudPage<E> {
    controller.page::<E>(Arc::new(DataUrlPreview))
}

fn print_one<E: View>(entity: &E, global: &GlobalOpts) {
    let out = output::render_single(&global.output, entity, E::detail, |e| e.id().to_owned());
    output::print_output(&out, global.quiet);
}

pub async fn list<E: View>(controller: &Controller, global: &GlobalOpts) -> Result<(), CliError> {
    let mut page = new_page::<E>(controller);
    page.load().await?;

    let items = page.items().snapshot();
    if items.is_empty() && matches!(global.output, OutputFormat::Table) {
        output::print_hint(&format!("No {} found", E::KIND.plural()), global);
        return Ok(());
    }
    let out = output::render_list(
        &global.output,
        items.as_slice(),
        |e| e.row(),
        |e| e.id().to_owned(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn get<E: View>(
    controller: &Controller,
    id: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let entity = controller.repository::<E>().get_by_id(id).await?;
    print_one(&entity, global);
    Ok(())
}

pub async fn add<E: View>(
    controller: &Controller,
    edits: Edits,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut page = new_page::<E>(controller);
    page.open_add()?;
    edits.apply(&mut page)?;

    let created = page.submit().await?;
    output::print_feedback(page.feedback(), global);
    print_one(&created, global);
    Ok(())
}

/// Seed a draft from the listed record, apply `edits`, and save.
pub async fn edit<E: View>(
    controller: &Controller,
    id: &str,
    edits: Edits,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if edits.is_empty() {
        return Err(CliError::InvalidValue {
            field: "edit".into(),
            reason: "nothing to change; pass at least one field flag".into(),
        });
    }

    let mut page = new_page::<E>(controller);
    page.load().await?;
    page.open_edit(id)?;
    edits.apply(&mut page)?;

    let updated = page.submit().await?;
    output::print_feedback(page.feedback(), global);
    print_one(&updated, global);
    Ok(())
}

pub async fn delete<E: View>(
    controller: &Controller,
    id: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut page = new_page::<E>(controller);
    page.load().await?;

    let action = format!("delete {} {id}", E::KIND.label().to_lowercase());
    util::ensure_can_confirm(&action, global.yes)?;

    let yes = global.yes;
    let prompt = move |message: &str| util::confirm(message, yes);
    if page.delete(id, &prompt).await? {
        output::print_feedback(page.feedback(), global);
    } else {
        output::print_hint("Cancelled", global);
    }
    Ok(())
}
