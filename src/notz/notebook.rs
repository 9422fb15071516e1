//! The authoritative in-memory note collection.
//!
//! The notebook owns the ordered sequence of notes and is the only place
//! ids and timestamps are assigned. Every mutation writes the full
//! collection through to storage before returning, so callers never
//! observe a committed change that is not persisted.

use crate::error::Result;
use crate::model::{NewNote, Note};
use crate::store::{KvBackend, NoteStorage};
use uuid::Uuid;

pub struct Notebook<B: KvBackend> {
    notes: Vec<Note>,
    storage: NoteStorage<B>,
}

impl<B: KvBackend> Notebook<B> {
    /// Load the notebook from storage, seeding on first run (see
    /// [`NoteStorage::load`]).
    pub fn open(backend: B, seed: &[NewNote]) -> Self {
        let mut storage = NoteStorage::new(backend);
        let notes = storage.load(seed);
        Self { notes, storage }
    }

    /// Append a note built from `draft` and persist the collection.
    ///
    /// Callers must validate the draft first; the notebook does not
    /// re-check it. Validation-for-display and validation-for-commit
    /// share the predicates in [`crate::validate`].
    pub fn create(&mut self, draft: NewNote) -> Result<Note> {
        let note = Note::new(draft);
        self.notes.push(note.clone());
        self.storage.save(&self.notes)?;
        Ok(note)
    }

    /// Remove the note with `id` if present. Returns whether a note was
    /// actually removed; an absent id is a no-op, not an error.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != *id);
        if self.notes.len() == before {
            return Ok(false);
        }
        self.storage.save(&self.notes)?;
        Ok(true)
    }

    /// Ordered read-only snapshot, insertion order.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn find(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }
}
