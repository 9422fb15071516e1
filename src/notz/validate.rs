//! Field validation for note drafts.
//!
//! Both predicates are pure and stateless: they are re-run against the
//! current draft on every input event, and whether a failing result is
//! actually *shown* to the user is the session's concern (activation
//! flags in [`crate::session`]), not theirs.

pub const TITLE_MAX: usize = 50;
pub const TEXT_MIN: usize = 20;
pub const TEXT_MAX: usize = 300;

/// A title must be present and at most 50 characters.
pub fn validate_title(title: &str) -> Option<&'static str> {
    if title.chars().count() > TITLE_MAX {
        return Some("can not exceed 50 characters");
    }
    if title.is_empty() {
        return Some("must be specified");
    }
    None
}

/// Note text must be between 20 and 300 characters inclusive.
pub fn validate_text(text: &str) -> Option<&'static str> {
    let len = text.chars().count();
    if len < TEXT_MIN {
        return Some("must be at least 20 characters");
    }
    if len > TEXT_MAX {
        return Some("can not exceed 300 characters");
    }
    None
}
