//! Ephemeral UI state, kept explicit and separate from the notebook.
//!
//! Three pieces live here: the draft form for the create dialog (field
//! values plus per-field activation flags that gate error display), the
//! browse state (search term, page number, dialog visibility), and the
//! deletion workflow state machine.

use crate::model::NewNote;
use crate::validate::{self, TEXT_MIN};
use uuid::Uuid;

/// Current validation errors for a draft, independent of display gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DraftErrors {
    pub title: Option<&'static str>,
    pub text: Option<&'static str>,
}

impl DraftErrors {
    pub fn any(&self) -> bool {
        self.title.is_some() || self.text.is_some()
    }
}

/// The create-note form: draft values plus activation flags.
///
/// A field's error becomes eligible for display only once the field is
/// activated. Titles activate on blur or a submit attempt; text also
/// activates early, as soon as its length first exceeds the 20-character
/// minimum while typing, so a user who overshoots and deletes back below
/// the threshold sees the error without blurring first.
#[derive(Debug, Clone, Default)]
pub struct DraftForm {
    title: String,
    text: String,
    title_activated: bool,
    text_activated: bool,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The user typed in the title field.
    pub fn title_input(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    /// The user typed in the text field.
    pub fn text_input(&mut self, value: impl Into<String>) {
        self.text = value.into();
        if self.text.chars().count() > TEXT_MIN {
            self.text_activated = true;
        }
    }

    /// The user left the title field.
    pub fn title_blur(&mut self) {
        self.title_activated = true;
    }

    /// The user left the text field.
    pub fn text_blur(&mut self) {
        self.text_activated = true;
    }

    /// A submit attempt activates both fields regardless of prior state.
    pub fn activate_all(&mut self) {
        self.title_activated = true;
        self.text_activated = true;
    }

    /// Raw validation state, recomputed from current values.
    pub fn errors(&self) -> DraftErrors {
        DraftErrors {
            title: validate::validate_title(&self.title),
            text: validate::validate_text(&self.text),
        }
    }

    /// Validation state filtered by activation: what the presentation
    /// should actually show.
    pub fn displayed_errors(&self) -> DraftErrors {
        let errors = self.errors();
        DraftErrors {
            title: if self.title_activated { errors.title } else { None },
            text: if self.text_activated { errors.text } else { None },
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.errors().any()
    }

    /// Take the draft for committing, resetting the form.
    pub fn take(&mut self) -> NewNote {
        let form = std::mem::take(self);
        NewNote {
            title: form.title,
            text: form.text,
        }
    }
}

/// Deletion workflow: `Idle -> ConfirmPending -> Idle`. The pending intent
/// costs nothing to hold and is discarded on decline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    ConfirmPending {
        id: Uuid,
    },
}

/// UI transient state. None of this is persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub search_term: String,
    page: usize,
    pub dialog_open: bool,
    pub draft: DraftForm,
    pub delete_flow: DeleteFlow,
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    /// Current page, 1-indexed.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// The confirmation message presented while a delete awaits a decision.
pub fn delete_prompt(title: &str) -> String {
    format!("Are you certain you want to delete the note \"{}\"?", title)
}
