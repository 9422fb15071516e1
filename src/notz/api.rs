//! # API Facade
//!
//! [`NotzApi`] is the single entry point for every user-facing operation.
//! The presentation layer feeds it raw events (keystrokes, blurs, submit,
//! page selection, search changes, delete requests, confirm results) and
//! reads back projections (`visible_page`, current page, draft state). It
//! holds no I/O assumptions: no stdout, no terminal, no exit codes.
//!
//! Generic over [`KvBackend`] so the same facade runs against the file
//! store in production and the in-memory store in tests.

use crate::error::Result;
use crate::model::{NewNote, Note};
use crate::notebook::Notebook;
use crate::session::{delete_prompt, DeleteFlow, DraftErrors, Session};
use crate::store::KvBackend;
use crate::view::{self, PageView};
use uuid::Uuid;

/// External yes/no gate guarding deletion. The workflow only cares that it
/// eventually resolves; how it is rendered (modal, toast, terminal prompt)
/// is the implementor's business.
pub trait ConfirmGate {
    fn confirm(&mut self, message: &str) -> bool;
}

pub struct NotzApi<B: KvBackend> {
    notebook: Notebook<B>,
    session: Session,
}

impl<B: KvBackend> NotzApi<B> {
    /// Open the notebook from `backend`, seeding on the first-ever run.
    pub fn open(backend: B, seed: &[NewNote]) -> Self {
        Self {
            notebook: Notebook::open(backend, seed),
            session: Session::new(),
        }
    }

    // --- Projections ---

    /// The visible slice for the current search term and page.
    pub fn visible_page(&self) -> PageView {
        view::visible_page(
            self.notebook.all(),
            &self.session.search_term,
            self.session.page(),
        )
    }

    pub fn current_page(&self) -> usize {
        self.session.page()
    }

    pub fn search_term(&self) -> &str {
        &self.session.search_term
    }

    pub fn note_count(&self) -> usize {
        self.notebook.len()
    }

    pub fn dialog_open(&self) -> bool {
        self.session.dialog_open
    }

    pub fn draft_errors(&self) -> DraftErrors {
        self.session.draft.displayed_errors()
    }

    // --- Browse events ---

    pub fn search_changed(&mut self, term: impl Into<String>) {
        self.session.search_term = term.into();
    }

    pub fn select_page(&mut self, page: usize) {
        self.session.set_page(page);
    }

    // --- Create dialog events ---

    pub fn open_dialog(&mut self) {
        self.session.draft = Default::default();
        self.session.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.session.draft = Default::default();
        self.session.dialog_open = false;
    }

    pub fn title_input(&mut self, value: impl Into<String>) {
        self.session.draft.title_input(value);
    }

    pub fn title_blur(&mut self) {
        self.session.draft.title_blur();
    }

    pub fn text_input(&mut self, value: impl Into<String>) {
        self.session.draft.text_input(value);
    }

    pub fn text_blur(&mut self) {
        self.session.draft.text_blur();
    }

    /// Attempt to create a note from the current draft. Always activates
    /// both fields' error display; commits nothing while either validator
    /// reports an error (returns `Ok(None)`). On success the note is
    /// appended and persisted and the dialog closes.
    pub fn submit_draft(&mut self) -> Result<Option<Note>> {
        self.session.draft.activate_all();
        if !self.session.draft.is_valid() {
            return Ok(None);
        }
        let note = self.notebook.create(self.session.draft.take())?;
        self.session.dialog_open = false;
        Ok(Some(note))
    }

    // --- Deletion workflow ---

    /// Request deletion of a note. Moves the workflow to `ConfirmPending`
    /// and returns the confirmation message to present; an unknown id
    /// leaves the workflow idle.
    pub fn request_delete(&mut self, id: &Uuid) -> Option<String> {
        let note = self.notebook.find(id)?;
        let message = delete_prompt(&note.title);
        self.session.delete_flow = DeleteFlow::ConfirmPending { id: *id };
        Some(message)
    }

    /// Resolve a pending delete request. Declining discards the intent
    /// without touching the notebook. Confirming deletes, then applies the
    /// page correction based on the pre-delete full collection count.
    /// Returns whether a note was removed.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Result<bool> {
        let flow = std::mem::take(&mut self.session.delete_flow);
        let DeleteFlow::ConfirmPending { id } = flow else {
            return Ok(false);
        };
        if !confirmed {
            return Ok(false);
        }

        let pre_delete_count = self.notebook.len();
        let removed = self.notebook.delete(&id)?;
        if removed {
            let page = view::page_after_delete(pre_delete_count, self.session.page());
            self.session.set_page(page);
        }
        Ok(removed)
    }

    /// Run the full confirm-then-commit sequence against a gate.
    pub fn delete_note(&mut self, id: &Uuid, gate: &mut impl ConfirmGate) -> Result<bool> {
        let Some(message) = self.request_delete(id) else {
            return Ok(false);
        };
        let confirmed = gate.confirm(&message);
        self.resolve_delete(confirmed)
    }
}
