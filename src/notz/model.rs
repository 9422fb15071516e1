use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted note. Immutable once created: notes can be deleted but
/// never edited, so there is no `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Mint a note from a draft, assigning a fresh id and the current time.
    pub fn new(draft: NewNote) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            text: draft.text,
            created_at: Utc::now(),
        }
    }
}

/// An unvalidated title/text pair pending creation. Carries no id or
/// timestamp; those are assigned by the notebook at commit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub text: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}
