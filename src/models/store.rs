//! In-memory note collection
//!
//! The store owns the ordered list of notes shown on the board together with
//! the id counter. Nothing here touches disk; the collection lives for the
//! process lifetime and is rebuilt from the seed notes on every start.

use crate::models::note::{Label, Note, NoteId};
use crate::models::seed;

/// Ordered collection of notes plus the id counter.
///
/// Ids come from a counter that only ever moves forward, so deleting the
/// highest-id note and creating a new one can never collide with a
/// surviving id.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds the store from the static seed notes
    pub fn seeded() -> Self {
        let notes = seed::seed_notes();
        let next_id = notes.last().map_or(1, |note| note.id + 1);
        Self { notes, next_id }
    }

    /// Appends a new note with the next id and returns a reference to it
    pub fn create(&mut self, title: String, content: String, label: Label) -> &Note {
        let note = Note {
            id: self.next_id,
            title,
            content,
            label,
            favorite: false,
        };
        self.next_id += 1;
        self.notes.push(note);
        self.notes.last().expect("note was just pushed")
    }

    /// Replaces the title, content and label of the note with the given id,
    /// keeping its id, favorite flag and position in the board order.
    /// Returns `None` if no note carries that id.
    pub fn update(
        &mut self,
        id: NoteId,
        title: String,
        content: String,
        label: Label,
    ) -> Option<&Note> {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        note.title = title;
        note.content = content;
        note.label = label;
        Some(note)
    }

    /// Removes the note with the given id; `false` if it was absent
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    /// Flips the favorite flag on the note with the given id; `false` if
    /// it was absent
    pub fn toggle_favorite(&mut self, id: NoteId) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.favorite = !note.favorite;
                true
            }
            None => false,
        }
    }

    /// The favorite subset in board order, recomputed on every call
    pub fn favorites(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(|note| note.favorite)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> NoteStore {
        let mut store = NoteStore::new();
        for title in titles {
            store.create(title.to_string(), format!("{title} content"), Label::Other);
        }
        store
    }

    #[test]
    fn create_assigns_sequential_ids_from_one() {
        let mut store = NoteStore::new();
        let first = store.create("A".to_string(), "a".to_string(), Label::Work).id;
        let second = store.create("B".to_string(), "b".to_string(), Label::Study).id;
        assert_eq!(first, 1, "empty store starts at id 1");
        assert_eq!(second, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_appends_to_end_of_board_order() {
        let mut store = store_with(&["A"]);
        store.create("B".to_string(), "b".to_string(), Label::Personal);
        let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(store.notes()[1].id, 2, "new note continues from last id");
    }

    #[test]
    fn create_never_reuses_a_deleted_id() {
        let mut store = store_with(&["A", "B"]);
        assert!(store.delete(1));
        let id = store.create("C".to_string(), "c".to_string(), Label::Other).id;
        assert_eq!(id, 3, "counter keeps moving forward past deletions");
        assert!(store.get(1).is_none());
    }

    #[test]
    fn create_after_deleting_highest_id_does_not_collide() {
        let mut store = store_with(&["A", "B", "C"]);
        assert!(store.delete(3));
        let id = store.create("D".to_string(), "d".to_string(), Label::Work).id;
        assert_eq!(id, 4, "id 3 is spent even though its note is gone");
        let ids: Vec<_> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn delete_removes_exactly_one_note() {
        let mut store = store_with(&["A", "B", "C"]);
        assert!(store.delete(2));
        assert_eq!(store.len(), 2);
        let ids: Vec<_> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_of_absent_id_is_a_noop() {
        let mut store = store_with(&["A", "B"]);
        assert!(!store.delete(99));
        assert_eq!(store.len(), 2, "length unchanged for absent id");
    }

    #[test]
    fn toggle_favorite_flips_only_that_note() {
        let mut store = store_with(&["A", "B", "C"]);
        let before: Vec<Note> = store.notes().to_vec();

        assert!(store.toggle_favorite(2));

        for (old, new) in before.iter().zip(store.notes()) {
            if new.id == 2 {
                assert!(new.favorite, "target note flips to favorite");
                assert_eq!(new.title, old.title, "other fields untouched");
                assert_eq!(new.content, old.content);
                assert_eq!(new.label, old.label);
            } else {
                assert_eq!(new, old, "non-target notes are untouched");
            }
        }

        assert!(store.toggle_favorite(2));
        assert!(!store.get(2).unwrap().favorite, "second toggle flips back");
    }

    #[test]
    fn toggle_favorite_of_absent_id_is_a_noop() {
        let mut store = store_with(&["A"]);
        assert!(!store.toggle_favorite(42));
        assert!(!store.get(1).unwrap().favorite);
    }

    #[test]
    fn favorites_is_a_store_order_subset() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        store.toggle_favorite(4);
        store.toggle_favorite(2);

        let favorites: Vec<_> = store.favorites().map(|n| n.id).collect();
        assert_eq!(favorites, vec![2, 4], "board order, not toggle order");
        assert!(store.favorites().all(|n| n.favorite));
    }

    #[test]
    fn favorites_reflects_later_toggles() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.favorites().count(), 0);
        store.toggle_favorite(1);
        assert_eq!(store.favorites().count(), 1, "not cached across mutations");
    }

    #[test]
    fn update_preserves_id_position_and_favorite() {
        let mut store = store_with(&["A", "B", "C"]);
        store.toggle_favorite(2);

        let updated = store
            .update(2, "B2".to_string(), "rewritten".to_string(), Label::Study)
            .expect("note 2 exists");
        assert_eq!(updated.id, 2);
        assert_eq!(updated.title, "B2");
        assert!(updated.favorite, "favorite flag survives an edit");

        let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B2", "C"], "position in order unchanged");
    }

    #[test]
    fn update_of_absent_id_returns_none() {
        let mut store = store_with(&["A"]);
        assert!(
            store
                .update(9, "X".to_string(), "x".to_string(), Label::Other)
                .is_none()
        );
        assert_eq!(store.get(1).unwrap().title, "A");
    }

    #[test]
    fn seeded_store_continues_ids_after_the_seeds() {
        let mut store = NoteStore::seeded();
        let seed_count = store.len();
        assert!(seed_count > 0, "seed data should not be empty");

        let last_seed_id = store.notes().last().unwrap().id;
        let id = store.create("New".to_string(), "new".to_string(), Label::Other).id;
        assert_eq!(id, last_seed_id + 1);
    }
}
