//! Filter & pagination engine.
//!
//! Pure derivations: given the full ordered collection, the current search
//! term, and the current page number, compute the visible slice. Nothing
//! here mutates state; the session owns the inputs.

use crate::model::Note;

/// Fixed number of notes per page.
pub const PAGE_SIZE: usize = 6;

/// One visible page of filtered notes.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub notes: Vec<Note>,
    /// ceil(filtered / PAGE_SIZE); 0 when nothing matches, in which case
    /// the presentation hides pagination entirely.
    pub total_pages: usize,
    /// Number of notes matching the filter, across all pages.
    pub filtered_count: usize,
}

/// Case-insensitive substring match against title or text. An empty term
/// matches every note.
fn matches(note: &Note, term_lower: &str) -> bool {
    note.title.to_lowercase().contains(term_lower)
        || note.text.to_lowercase().contains(term_lower)
}

/// Derive the visible page. Filtering preserves insertion order (no
/// relevance ranking); `page` is 1-indexed and the slice is clipped to the
/// filtered collection's bounds.
pub fn visible_page(notes: &[Note], search_term: &str, page: usize) -> PageView {
    let term_lower = search_term.to_lowercase();
    let filtered: Vec<&Note> = notes.iter().filter(|n| matches(n, &term_lower)).collect();

    let filtered_count = filtered.len();
    let total_pages = filtered_count.div_ceil(PAGE_SIZE);

    let start = page.saturating_sub(1) * PAGE_SIZE;
    let visible = if start >= filtered_count {
        Vec::new()
    } else {
        filtered[start..(start + PAGE_SIZE).min(filtered_count)]
            .iter()
            .map(|n| (*n).clone())
            .collect()
    };

    PageView {
        notes: visible,
        total_pages,
        filtered_count,
    }
}

/// Page-number correction after a delete: if the deleted note was the only
/// one on the trailing page (pre-delete FULL count mod 6 == 1), step back a
/// page so the user is not stranded on an empty page. Deliberately driven
/// by the unfiltered count, while the displayed slice is driven by the
/// filtered one.
pub fn page_after_delete(pre_delete_count: usize, page: usize) -> usize {
    if pre_delete_count % PAGE_SIZE == 1 && page > 1 {
        page - 1
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewNote, Note};

    fn note(title: &str, text: &str) -> Note {
        Note::new(NewNote::new(title, text))
    }

    fn numbered(count: usize) -> Vec<Note> {
        (1..=count)
            .map(|i| note(&format!("Note {}", i), &format!("Body of note number {}.", i)))
            .collect()
    }

    #[test]
    fn empty_term_matches_everything() {
        let notes = numbered(3);
        let view = visible_page(&notes, "", 1);
        assert_eq!(view.filtered_count, 3);
        assert_eq!(view.notes, notes);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let notes = vec![
            note("abc", "lowercase body text here."),
            note("xyz", "unrelated body text here."),
        ];
        let view = visible_page(&notes, "ABC", 1);
        assert_eq!(view.notes.len(), 1);
        assert_eq!(view.notes[0].title, "abc");
    }

    #[test]
    fn filter_matches_text_as_well_as_title() {
        let notes = vec![
            note("Plain", "this body mentions zebras somewhere."),
            note("Zebra", "this body does not mention the word."),
            note("Other", "completely unrelated body text."),
        ];
        let view = visible_page(&notes, "zebra", 1);
        let titles: Vec<&str> = view.notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Plain", "Zebra"]);
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let notes = vec![
            note("b match", "matching body text for the test."),
            note("a match", "matching body text for the test."),
        ];
        let view = visible_page(&notes, "match", 1);
        let titles: Vec<&str> = view.notes.iter().map(|n| n.title.as_str()).collect();
        // Insertion order, not alphabetical
        assert_eq!(titles, vec!["b match", "a match"]);
    }

    #[test]
    fn seven_notes_split_six_and_one() {
        let notes = numbered(7);

        let page1 = visible_page(&notes, "", 1);
        assert_eq!(page1.notes.len(), 6);
        assert_eq!(page1.notes[0].title, "Note 1");
        assert_eq!(page1.notes[5].title, "Note 6");
        assert_eq!(page1.total_pages, 2);

        let page2 = visible_page(&notes, "", 2);
        assert_eq!(page2.notes.len(), 1);
        assert_eq!(page2.notes[0].title, "Note 7");
    }

    #[test]
    fn exactly_six_notes_is_one_page() {
        let view = visible_page(&numbered(6), "", 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.notes.len(), 6);
    }

    #[test]
    fn one_note_is_one_page() {
        let view = visible_page(&numbered(1), "", 1);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn no_matches_means_zero_pages() {
        let view = visible_page(&numbered(3), "no such term", 1);
        assert_eq!(view.total_pages, 0);
        assert!(view.notes.is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty_but_counts_stand() {
        let view = visible_page(&numbered(7), "", 5);
        assert!(view.notes.is_empty());
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.filtered_count, 7);
    }

    #[test]
    fn page_steps_back_when_trailing_page_had_one_note() {
        // 7 notes: page 2 holds exactly one
        assert_eq!(page_after_delete(7, 2), 1);
        // 13 notes: page 3 holds exactly one
        assert_eq!(page_after_delete(13, 3), 2);
    }

    #[test]
    fn page_stays_when_trailing_page_had_more() {
        assert_eq!(page_after_delete(8, 2), 2);
        assert_eq!(page_after_delete(12, 2), 2);
    }

    #[test]
    fn page_never_drops_below_one() {
        assert_eq!(page_after_delete(1, 1), 1);
    }
}
