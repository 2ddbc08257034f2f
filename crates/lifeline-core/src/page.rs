// ── CRUD page orchestration ──
//
// One `CrudPage` per entity screen: load → edit in a dialog → submit or
// delete → reload. Network work can run outside the page through the
// split-phase `begin_*`/`finish_*` pairs; `load`, `submit` and `delete`
// run the whole round trip in place.

use std::marker::PhantomData;
use std::sync::Arc;

use lifeline_api::{RequestBody, Upload};
use serde_json::Value;
use tracing::{debug, warn};

use crate::draft::{DialogMode, Draft};
use crate::error::CoreError;
use crate::model::Entity;
use crate::preview::PreviewProvider;
use crate::repository::Repository;
use crate::store::EntityList;

const BUSY: &str = "A submission is already in progress";
const NO_DIALOG: &str = "No dialog is open";

// ── Page state ─────────────────────────────────────────────────────

/// An open add/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog<D> {
    pub mode: DialogMode,
    pub draft: D,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<D> {
    Idle,
    Loading,
    DialogOpen(Dialog<D>),
    /// A create, update or delete is in flight. Submissions keep their
    /// dialog so a failure can hand it back.
    Submitting { dialog: Option<Dialog<D>> },
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Outcome message of the last user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    fn success(message: String) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message,
        }
    }
}

/// Yes/no collaborator asked before a delete.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

// ── Tickets ────────────────────────────────────────────────────────

/// Generation stamp of one list load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

/// A validated submission ready to be sent.
#[derive(Debug)]
#[must_use]
pub struct SubmitTicket<E> {
    seq: u64,
    mode: DialogMode,
    body: RequestBody,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SubmitTicket<E> {
    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Run the create or update against `repo`.
    pub async fn send(self, repo: &dyn Repository<E>) -> SubmitDone<E> {
        let Self { seq, mode, body, .. } = self;
        let result = match &mode {
            DialogMode::Add => repo.create(body).await,
            DialogMode::Edit { id } => repo.update(id, body).await,
        };
        SubmitDone { seq, mode, result }
    }
}

/// Result of a sent submission, fed back through [`CrudPage::finish_submit`].
#[derive(Debug)]
pub struct SubmitDone<E> {
    seq: u64,
    mode: DialogMode,
    result: Result<E, CoreError>,
}

/// A confirmed delete ready to be sent.
#[derive(Debug)]
#[must_use]
pub struct DeleteTicket<E> {
    seq: u64,
    id: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> DeleteTicket<E> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn send(self, repo: &dyn Repository<E>) -> DeleteDone {
        let result = repo.delete(&self.id).await;
        DeleteDone {
            seq: self.seq,
            id: self.id,
            result,
        }
    }
}

/// Result of a sent delete, fed back through [`CrudPage::finish_delete`].
#[derive(Debug)]
pub struct DeleteDone {
    seq: u64,
    id: String,
    result: Result<Value, CoreError>,
}

// ── Page ───────────────────────────────────────────────────────────

/// Orchestrates list, dialog and mutations for one entity type.
///
/// Errors are caught at every action: they land in [`feedback`](Self::feedback)
/// and the state, the previous list stays in place, and the error is also
/// returned to the caller.
pub struct CrudPage<E: Entity> {
    repo: Arc<dyn Repository<E>>,
    preview: Arc<dyn PreviewProvider>,
    items: EntityList<E>,
    state: PageState<E::Draft>,
    feedback: Option<Feedback>,
    /// Bumped on every `begin_load`; older tickets are stale.
    generation: u64,
    /// Bumped on every accepted submit or delete.
    seq: u64,
}

impl<E: Entity> CrudPage<E> {
    pub fn new(repo: Arc<dyn Repository<E>>, preview: Arc<dyn PreviewProvider>) -> Self {
        Self {
            repo,
            preview,
            items: EntityList::new(),
            state: PageState::Idle,
            feedback: None,
            generation: 0,
            seq: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn repository(&self) -> Arc<dyn Repository<E>> {
        Arc::clone(&self.repo)
    }

    pub fn items(&self) -> &EntityList<E> {
        &self.items
    }

    pub fn state(&self) -> &PageState<E::Draft> {
        &self.state
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    pub fn dialog(&self) -> Option<&Dialog<E::Draft>> {
        match &self.state {
            PageState::DialogOpen(dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, PageState::Submitting { .. })
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Start a list load. A dialog or submission in progress is left alone.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        if matches!(
            self.state,
            PageState::Idle | PageState::Loading | PageState::Error(_)
        ) {
            self.state = PageState::Loading;
        }
        debug!(kind = %E::KIND, generation = self.generation, "load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply a load result. Returns `Ok(false)` when a newer load has
    /// started since `ticket` was issued; the result is then dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<E>, CoreError>,
    ) -> Result<bool, CoreError> {
        if ticket.generation != self.generation {
            warn!(
                kind = %E::KIND,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale list response"
            );
            return Ok(false);
        }

        match result {
            Ok(items) => {
                debug!(kind = %E::KIND, count = items.len(), "load finished");
                self.items.replace(items);
                if matches!(self.state, PageState::Loading) {
                    self.state = PageState::Idle;
                }
                Ok(true)
            }
            Err(err) => {
                let message = describe(&err, format!("Failed to fetch {}", E::KIND.plural()));
                self.feedback = Some(Feedback::error(message.clone()));
                if matches!(self.state, PageState::Loading) {
                    self.state = PageState::Error(message);
                }
                Err(err)
            }
        }
    }

    pub async fn load(&mut self) -> Result<bool, CoreError> {
        let ticket = self.begin_load();
        let repo = self.repository();
        let result = repo.get_all().await;
        self.finish_load(ticket, result)
    }

    // ── Dialog ───────────────────────────────────────────────────────

    pub fn open_add(&mut self) -> Result<(), CoreError> {
        self.ensure_not_busy()?;
        self.state = PageState::DialogOpen(Dialog {
            mode: DialogMode::Add,
            draft: E::Draft::default(),
        });
        Ok(())
    }

    /// Open an edit dialog seeded from the listed record with `id`.
    pub fn open_edit(&mut self, id: &str) -> Result<(), CoreError> {
        self.ensure_not_busy()?;
        let entity = self.items.get(id).ok_or_else(|| not_found::<E>(id))?;
        self.state = PageState::DialogOpen(Dialog {
            mode: DialogMode::Edit { id: id.to_owned() },
            draft: E::Draft::from_entity(&entity),
        });
        Ok(())
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), CoreError> {
        self.dialog_mut()?.draft.set_field(field, value.into())
    }

    /// Attach a file; the preview provider's locator is stored with it.
    pub fn select_file(&mut self, field: &str, upload: Upload) -> Result<(), CoreError> {
        let preview = self.preview.preview(&upload);
        self.dialog_mut()?.draft.attach(field, upload, preview)
    }

    /// Discard the open dialog. No-op unless a dialog is open.
    pub fn cancel(&mut self) {
        if matches!(self.state, PageState::DialogOpen(_)) {
            self.state = PageState::Idle;
        }
    }

    // ── Submit ───────────────────────────────────────────────────────

    /// Validate the open dialog and move to `Submitting`.
    ///
    /// Validation failures leave the dialog open and are reported in
    /// feedback; nothing is sent.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<E>, CoreError> {
        let dialog = match std::mem::replace(&mut self.state, PageState::Idle) {
            PageState::DialogOpen(dialog) => dialog,
            other => {
                let busy = matches!(other, PageState::Submitting { .. });
                self.state = other;
                return Err(CoreError::invalid_state(if busy { BUSY } else { NO_DIALOG }));
            }
        };

        if let Err(err) = dialog.draft.validate(&dialog.mode) {
            self.feedback = Some(Feedback::error(err.to_string()));
            self.state = PageState::DialogOpen(dialog);
            return Err(err);
        }

        self.seq += 1;
        let ticket = SubmitTicket {
            seq: self.seq,
            mode: dialog.mode.clone(),
            body: dialog.draft.to_body(),
            _entity: PhantomData,
        };
        debug!(kind = %E::KIND, mode = ?ticket.mode, "submitting");
        self.state = PageState::Submitting {
            dialog: Some(dialog),
        };
        Ok(ticket)
    }

    /// Apply a submission result.
    ///
    /// Success closes the dialog; the caller reloads the list. Failure
    /// reopens the dialog with its draft intact.
    pub fn finish_submit(&mut self, done: SubmitDone<E>) -> Result<E, CoreError> {
        if done.seq != self.seq {
            warn!(kind = %E::KIND, seq = done.seq, "ignoring superseded submission");
            return done.result;
        }

        let dialog = match std::mem::replace(&mut self.state, PageState::Idle) {
            PageState::Submitting { dialog } => dialog,
            other => {
                self.state = other;
                None
            }
        };

        let label = E::KIND.label();
        match done.result {
            Ok(entity) => {
                let verb = if done.mode.is_add() { "added" } else { "updated" };
                self.feedback = Some(Feedback::success(format!("{label} {verb} successfully")));
                Ok(entity)
            }
            Err(err) => {
                let fallback = format!("Error saving {}. Please try again.", label.to_lowercase());
                self.feedback = Some(Feedback::error(describe(&err, fallback)));
                if let Some(dialog) = dialog {
                    self.state = PageState::DialogOpen(dialog);
                }
                Err(err)
            }
        }
    }

    /// Validate, send, and reload on success.
    pub async fn submit(&mut self) -> Result<E, CoreError> {
        let ticket = self.begin_submit()?;
        let repo = self.repository();
        let done = ticket.send(repo.as_ref()).await;
        let entity = self.finish_submit(done)?;
        // A failed reload is already reported in feedback and state.
        let _ = self.load().await;
        Ok(entity)
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Ask `confirm`, then move to `Submitting`.
    ///
    /// Returns `Ok(None)` when the user declines.
    pub fn begin_delete(
        &mut self,
        id: &str,
        confirm: &dyn Confirm,
    ) -> Result<Option<DeleteTicket<E>>, CoreError> {
        self.ensure_not_busy()?;
        if self.dialog().is_some() {
            return Err(CoreError::invalid_state("Close the dialog before deleting"));
        }
        if self.items.get(id).is_none() {
            return Err(not_found::<E>(id));
        }

        let prompt = format!(
            "Are you sure you want to delete this {}?",
            E::KIND.label().to_lowercase()
        );
        if !confirm.confirm(&prompt) {
            debug!(kind = %E::KIND, id, "delete declined");
            return Ok(None);
        }

        self.seq += 1;
        self.state = PageState::Submitting { dialog: None };
        Ok(Some(DeleteTicket {
            seq: self.seq,
            id: id.to_owned(),
            _entity: PhantomData,
        }))
    }

    /// Apply a delete result; the caller reloads on success.
    pub fn finish_delete(&mut self, done: DeleteDone) -> Result<Value, CoreError> {
        if done.seq != self.seq {
            warn!(kind = %E::KIND, id = %done.id, "ignoring superseded delete");
            return done.result;
        }
        if self.is_busy() {
            self.state = PageState::Idle;
        }

        let label = E::KIND.label();
        match done.result {
            Ok(body) => {
                self.feedback = Some(Feedback::success(format!("{label} deleted successfully")));
                Ok(body)
            }
            Err(err) => {
                let fallback = format!("Error deleting {}. Please try again.", label.to_lowercase());
                self.feedback = Some(Feedback::error(describe(&err, fallback)));
                Err(err)
            }
        }
    }

    /// Confirm, delete, and reload. Returns `Ok(false)` when declined.
    pub async fn delete(
        &mut self,
        id: &str,
        confirm: &(dyn Confirm + Sync),
    ) -> Result<bool, CoreError> {
        let Some(ticket) = self.begin_delete(id, confirm)? else {
            return Ok(false);
        };
        let repo = self.repository();
        let done = ticket.send(repo.as_ref()).await;
        self.finish_delete(done)?;
        let _ = self.load().await;
        Ok(true)
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn ensure_not_busy(&self) -> Result<(), CoreError> {
        if self.is_busy() {
            Err(CoreError::invalid_state(BUSY))
        } else {
            Ok(())
        }
    }

    fn dialog_mut(&mut self) -> Result<&mut Dialog<E::Draft>, CoreError> {
        match &mut self.state {
            PageState::DialogOpen(dialog) => Ok(dialog),
            _ => Err(CoreError::invalid_state(NO_DIALOG)),
        }
    }
}

fn not_found<E: Entity>(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: E::KIND.label().to_owned(),
        id: id.to_owned(),
    }
}

/// The error's own message, or `fallback` when it has none.
fn describe(err: &CoreError, fallback: String) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}
