//! # Storage Layer
//!
//! The persisted surface is a tiny key-value store with exactly two keys:
//!
//! - `notes` — the JSON-serialized ordered note collection (`created_at`
//!   as an RFC 3339 string)
//! - `seeded` — a one-time flag recording that the seed set has been
//!   applied for this storage location
//!
//! The [`KvBackend`] trait abstracts the store so the core can run against
//! different backends:
//!
//! - [`fs::FileBackend`]: production, one file per key under a data dir
//! - [`memory::InMemoryBackend`]: in-memory, for tests (supports simulated
//!   read failures)
//!
//! [`NoteStorage`] sits on top of a backend and implements the collection
//! round-trip: fail-soft loading with seed-data fallback, and
//! whole-collection saves after every mutation. Seeding only ever happens
//! on the first run for a storage location; once the flag is set, an empty
//! stored collection means the user deleted everything and stays empty.

use crate::error::Result;
use crate::model::{NewNote, Note};

pub mod fs;
pub mod memory;

pub const NOTES_KEY: &str = "notes";
pub const SEEDED_KEY: &str = "seeded";

/// Abstract interface for the persisted key-value surface.
pub trait KvBackend {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<B: KvBackend + ?Sized> KvBackend for &mut B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Load/save adapter for the note collection.
pub struct NoteStorage<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> NoteStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend_ref(&self) -> &B {
        &self.backend
    }

    /// Load the stored collection. Never fails: a missing key, unreadable
    /// backend, or malformed payload all yield "no stored notes".
    ///
    /// On the first-ever run for this storage location (seed flag unset)
    /// an empty collection is initialized from `seed` and written back;
    /// afterwards the flag keeps an empty collection empty.
    pub fn load(&mut self, seed: &[NewNote]) -> Vec<Note> {
        let flag_read = self.backend.get(SEEDED_KEY);
        let notes_read = self.backend.get(NOTES_KEY);

        let mut notes: Vec<Note> = match &notes_read {
            Ok(Some(raw)) => serde_json::from_str(raw).unwrap_or_default(),
            _ => Vec::new(),
        };

        // Seed only on a clean first run: both reads succeeded and the
        // flag was never written. A failed read is not "never
        // initialized" — seeding on it would overwrite a collection we
        // merely could not read.
        let first_run = matches!(flag_read, Ok(None)) && notes_read.is_ok();
        if first_run && notes.is_empty() {
            notes = seed.iter().cloned().map(Note::new).collect();
            let _ = self.save(&notes);
        }
        if flag_read.is_ok() {
            let _ = self.backend.set(SEEDED_KEY, "true");
        }

        notes
    }

    /// Persist the full collection. No incremental diffing; every save
    /// replaces the stored sequence wholesale.
    pub fn save(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)?;
        self.backend.set(NOTES_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryBackend;
    use super::*;
    use crate::model::NewNote;

    fn seed() -> Vec<NewNote> {
        vec![
            NewNote::new("First", "The very first seeded note text."),
            NewNote::new("Second", "The second seeded note text."),
        ]
    }

    #[test]
    fn first_run_applies_seed() {
        let mut storage = NoteStorage::new(InMemoryBackend::new());
        let notes = storage.load(&seed());
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "First");
        assert_eq!(notes[1].title, "Second");
    }

    #[test]
    fn seeded_notes_are_persisted_immediately() {
        let mut storage = NoteStorage::new(InMemoryBackend::new());
        let notes = storage.load(&seed());

        // A reload against the same backend finds the seeded notes, ids
        // and all, rather than re-seeding
        let reloaded = storage.load(&seed());
        assert_eq!(reloaded, notes);
    }

    #[test]
    fn empty_collection_is_not_reseeded_once_flag_is_set() {
        let mut storage = NoteStorage::new(InMemoryBackend::new());
        storage.load(&seed());

        // User deletes everything
        storage.save(&[]).unwrap();

        let notes = storage.load(&seed());
        assert!(notes.is_empty());
    }

    #[test]
    fn stored_notes_suppress_seeding_even_without_flag() {
        let note = Note::new(NewNote::new("Kept", "A note that was already stored."));
        let mut backend = InMemoryBackend::new();
        backend
            .set(NOTES_KEY, &serde_json::to_string(&[note.clone()]).unwrap())
            .unwrap();

        let mut storage = NoteStorage::new(backend);
        let notes = storage.load(&seed());
        assert_eq!(notes, vec![note]);
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        let mut backend = InMemoryBackend::new();
        backend.set(SEEDED_KEY, "true").unwrap();
        backend.set(NOTES_KEY, "{\"not\": \"an array\"}").unwrap();

        let mut storage = NoteStorage::new(backend);
        assert!(storage.load(&seed()).is_empty());

        let mut backend = InMemoryBackend::new();
        backend.set(SEEDED_KEY, "true").unwrap();
        backend.set(NOTES_KEY, "[{\"garbage\": true}]").unwrap();

        let mut storage = NoteStorage::new(backend);
        assert!(storage.load(&seed()).is_empty());
    }

    #[test]
    fn unreadable_backend_loads_as_empty() {
        let mut backend = InMemoryBackend::new();
        backend.set(SEEDED_KEY, "true").unwrap();
        backend.poison_reads();

        let mut storage = NoteStorage::new(backend);
        assert!(storage.load(&seed()).is_empty());
    }

    #[test]
    fn read_failure_never_overwrites_stored_notes() {
        let note = Note::new(NewNote::new("Held", "A stored note behind a flaky read."));
        let mut backend = InMemoryBackend::new();
        backend.set(SEEDED_KEY, "true").unwrap();
        backend
            .set(NOTES_KEY, &serde_json::to_string(&[note.clone()]).unwrap())
            .unwrap();
        backend.poison_reads();

        let mut storage = NoteStorage::new(backend);
        // The failed load degrades to empty without seeding
        assert!(storage.load(&seed()).is_empty());

        // Once reads recover, the user's collection is still intact
        storage.backend.heal_reads();
        assert_eq!(storage.load(&seed()), vec![note]);
    }

    #[test]
    fn round_trip_preserves_notes_exactly() {
        let notes: Vec<Note> = vec![
            Note::new(NewNote::new("Alpha", "Text for the alpha note here.")),
            Note::new(NewNote::new("Beta", "Text for the beta note here.")),
            Note::new(NewNote::new("Gamma", "Text for the gamma note here.")),
        ];

        let mut storage = NoteStorage::new(InMemoryBackend::new());
        storage.save(&notes).unwrap();
        let loaded = storage.load(&[]);

        assert_eq!(loaded, notes);
    }
}
