//! Sticky-note collection persisted as one ordered sequence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    config::CafeConfig,
    model::{DragSession, PointerPosition, Position},
    persistence::{PersistentStore, STICKY_NOTES_KEY},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: String,
    pub text: String,
    /// Stored flat as `x`/`y` next to `id` and `text`.
    #[serde(flatten)]
    pub position: Position,
}

/// Where new notes appear: `base + cascade * n` on both axes for the n-th live note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteLayout {
    pub base: Position,
    pub cascade: f64,
}

impl NoteLayout {
    pub fn from_config(config: &CafeConfig) -> Self {
        Self {
            base: config.note_base(),
            cascade: config.note_cascade,
        }
    }

    /// Offsets depend only on the current count, so deleting then adding can land a new note
    /// exactly on an older one.
    pub fn slot(&self, count: usize) -> Position {
        let step = self.cascade * count as f64;
        self.base.offset(step, step)
    }
}

impl Default for NoteLayout {
    fn default() -> Self {
        Self::from_config(&CafeConfig::default())
    }
}

#[derive(Debug, Clone)]
struct NoteDrag {
    note_id: String,
    session: DragSession,
}

#[derive(Debug, Clone)]
pub struct StickyNoteCollection {
    store: PersistentStore,
    layout: NoteLayout,
    notes: Vec<StickyNote>,
    drag: Option<NoteDrag>,
}

impl StickyNoteCollection {
    /// Restores persisted notes. A stored value that is not an array yields no notes; array
    /// entries that are not well-formed notes are skipped.
    pub fn load(store: PersistentStore, layout: NoteLayout) -> Self {
        let notes = store
            .get::<Vec<Value>>(STICKY_NOTES_KEY)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| serde_json::from_value::<StickyNote>(value).ok())
            .collect();
        Self {
            store,
            layout,
            notes,
            drag: None,
        }
    }

    pub fn notes(&self) -> &[StickyNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StickyNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Appends an empty note at the next cascade slot and returns its id.
    pub fn add_note(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        let position = self.layout.slot(self.notes.len());
        self.notes.push(StickyNote {
            id: id.clone(),
            text: String::new(),
            position,
        });
        self.persist();
        id
    }

    /// Removes the note with `id`; absent ids are a no-op.
    pub fn delete_note(&mut self, id: &str) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.drag.as_ref().is_some_and(|drag| drag.note_id == id) {
            self.drag = None;
        }
        if self.notes.len() != before {
            self.persist();
        }
    }

    /// Replaces the text of exactly one note. No length limit, no validation.
    pub fn update_text(&mut self, id: &str, text: impl Into<String>) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };
        note.text = text.into();
        self.persist();
    }

    /// Starts a drag session for one note. Returns `false` when the note does not exist.
    pub fn begin_drag(&mut self, id: &str, pointer: PointerPosition) -> bool {
        let Some(note) = self.get(id) else {
            return false;
        };
        self.drag = Some(NoteDrag {
            note_id: note.id.clone(),
            session: DragSession::begin(pointer, note.position),
        });
        true
    }

    /// Moves the dragged note; returns its new position while a session is active.
    pub fn drag_to(&mut self, pointer: PointerPosition) -> Option<Position> {
        let drag = self.drag.as_ref()?;
        let next = drag.session.position_at(pointer);
        let note_id = drag.note_id.clone();
        let Some(note) = self.notes.iter_mut().find(|note| note.id == note_id) else {
            self.drag = None;
            return None;
        };
        note.position = next;
        self.persist();
        Some(next)
    }

    /// Ends the active drag session, if any.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    pub fn dragging_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.note_id.as_str())
    }

    fn persist(&self) {
        self.store.set(STICKY_NOTES_KEY, &self.notes);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn collection_over(prefs: &MemoryPrefsStore) -> StickyNoteCollection {
        StickyNoteCollection::load(
            PersistentStore::new(Rc::new(prefs.clone())),
            NoteLayout::default(),
        )
    }

    #[test]
    fn notes_cascade_from_the_base_point() {
        let mut notes = collection_over(&MemoryPrefsStore::default());
        let first = notes.add_note();
        let second = notes.add_note();
        let third = notes.add_note();

        assert_eq!(notes.get(&first).map(|n| n.position), Some(Position::new(40.0, 90.0)));
        assert_eq!(notes.get(&second).map(|n| n.position), Some(Position::new(58.0, 108.0)));
        assert_eq!(notes.get(&third).map(|n| n.position), Some(Position::new(76.0, 126.0)));
        assert!(notes.notes().iter().all(|n| n.text.is_empty()));
        assert_ne!(first, second);
    }

    #[test]
    fn add_then_delete_restores_previous_contents() {
        let mut notes = collection_over(&MemoryPrefsStore::default());
        let keep = notes.add_note();
        notes.update_text(&keep, "buy oat milk");
        let before = notes.notes().to_vec();

        let added = notes.add_note();
        notes.delete_note(&added);
        assert_eq!(notes.notes(), before.as_slice());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut notes = collection_over(&MemoryPrefsStore::default());
        let id = notes.add_note();
        notes.delete_note(&id);
        notes.delete_note(&id);
        notes.delete_note("never-existed");
        assert!(notes.is_empty());
    }

    #[test]
    fn update_text_touches_only_the_target_text() {
        let mut notes = collection_over(&MemoryPrefsStore::default());
        let a = notes.add_note();
        let b = notes.add_note();
        let before_b = notes.get(&b).cloned();
        let before_position = notes.get(&a).map(|n| n.position);

        notes.update_text(&a, "x".repeat(10_000));

        assert_eq!(notes.get(&a).map(|n| n.text.len()), Some(10_000));
        assert_eq!(notes.get(&a).map(|n| n.position), before_position);
        assert_eq!(notes.get(&b).cloned(), before_b);
    }

    #[test]
    fn readding_after_delete_can_overlap_an_older_note() {
        // Known quirk: slots come from the live count only.
        let mut notes = collection_over(&MemoryPrefsStore::default());
        let first = notes.add_note();
        let second = notes.add_note();
        notes.delete_note(&first);
        let third = notes.add_note();

        assert_eq!(
            notes.get(&third).map(|n| n.position),
            notes.get(&second).map(|n| n.position)
        );
    }

    #[test]
    fn each_note_drags_independently_and_persists() {
        let prefs = MemoryPrefsStore::default();
        let mut notes = collection_over(&prefs);
        let a = notes.add_note();
        let b = notes.add_note();

        assert!(notes.begin_drag(&b, PointerPosition::new(100, 100)));
        assert_eq!(notes.dragging_id(), Some(b.as_str()));
        assert_eq!(
            notes.drag_to(PointerPosition::new(90, 130)),
            Some(Position::new(48.0, 138.0))
        );
        assert!(notes.end_drag());
        assert_eq!(notes.drag_to(PointerPosition::new(0, 0)), None);

        let reloaded = collection_over(&prefs);
        assert_eq!(reloaded.get(&a).map(|n| n.position), Some(Position::new(40.0, 90.0)));
        assert_eq!(reloaded.get(&b).map(|n| n.position), Some(Position::new(48.0, 138.0)));
    }

    #[test]
    fn deleting_the_dragged_note_ends_its_session() {
        let mut notes = collection_over(&MemoryPrefsStore::default());
        let id = notes.add_note();
        notes.begin_drag(&id, PointerPosition::new(0, 0));
        notes.delete_note(&id);
        assert_eq!(notes.drag_to(PointerPosition::new(5, 5)), None);
        assert!(!notes.begin_drag(&id, PointerPosition::new(0, 0)));
    }

    #[test]
    fn persists_flat_records_in_order() {
        let prefs = MemoryPrefsStore::default();
        let mut notes = collection_over(&prefs);
        let id = notes.add_note();
        notes.update_text(&id, "hi");

        let stored: Vec<Value> =
            serde_json::from_str(&prefs.raw(STICKY_NOTES_KEY).expect("persisted")).expect("json");
        assert_eq!(
            stored,
            vec![serde_json::json!({"id": id, "text": "hi", "x": 40.0, "y": 90.0})]
        );
    }

    #[test]
    fn malformed_storage_is_tolerated() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(STICKY_NOTES_KEY, r#"{"not":"an array"}"#);
        assert!(collection_over(&prefs).is_empty());

        prefs.insert_raw(
            STICKY_NOTES_KEY,
            r#"[{"id":"a","text":"ok","x":1,"y":2},{"id":"b"},7]"#,
        );
        let notes = collection_over(&prefs);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get("a").map(|n| n.position), Some(Position::new(1.0, 2.0)));
    }
}
