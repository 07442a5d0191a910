//! Store-backed 2-D position with pointer-drag sessions.

use crate::{
    model::{DragSession, PointerPosition, Position},
    persistence::PersistentStore,
};

/// Position of one movable widget, persisted under its own key.
///
/// Instances are fully independent: each holds its own session and storage key.
#[derive(Debug, Clone)]
pub struct DraggablePosition {
    store: PersistentStore,
    key: String,
    position: Position,
    session: Option<DragSession>,
}

impl DraggablePosition {
    /// Restores the persisted `{x, y}` under `key`, or uses `default` when it is absent or not a
    /// pair of numbers.
    pub fn load(store: PersistentStore, key: impl Into<String>, default: Position) -> Self {
        let key = key.into();
        let position = store.get::<Position>(&key).unwrap_or(default);
        Self {
            store,
            key,
            position,
            session: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a drag session, capturing the current position.
    pub fn on_grab(&mut self, pointer: PointerPosition) {
        self.session = Some(DragSession::begin(pointer, self.position));
    }

    /// Moves the widget while a session is active; returns the new position.
    pub fn on_move(&mut self, pointer: PointerPosition) -> Option<Position> {
        let session = self.session?;
        let next = session.position_at(pointer);
        self.set_position(next);
        Some(next)
    }

    /// Ends the session. Returns whether a session was active.
    pub fn on_release(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.store.set(&self.key, &self.position);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::persistence::POMODORO_DOCK_KEY;

    fn store_over(prefs: &MemoryPrefsStore) -> PersistentStore {
        PersistentStore::new(Rc::new(prefs.clone()))
    }

    #[test]
    fn falls_back_to_default_when_nothing_persisted() {
        let widget = DraggablePosition::load(
            PersistentStore::memory(),
            POMODORO_DOCK_KEY,
            Position::new(5.0, 6.0),
        );
        assert_eq!(widget.position(), Position::new(5.0, 6.0));
        assert!(!widget.is_dragging());
    }

    #[test]
    fn falls_back_to_default_when_persisted_pair_is_not_numeric() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(POMODORO_DOCK_KEY, r#"{"x":"12","y":4}"#);
        let widget =
            DraggablePosition::load(store_over(&prefs), POMODORO_DOCK_KEY, Position::default());
        assert_eq!(widget.position(), Position::default());

        prefs.insert_raw(POMODORO_DOCK_KEY, r#"{"x":12}"#);
        let widget =
            DraggablePosition::load(store_over(&prefs), POMODORO_DOCK_KEY, Position::default());
        assert_eq!(widget.position(), Position::default());
    }

    #[test]
    fn grab_move_release_translates_and_survives_reload() {
        let prefs = MemoryPrefsStore::default();
        let mut widget = DraggablePosition::load(
            store_over(&prefs),
            POMODORO_DOCK_KEY,
            Position::new(10.0, 20.0),
        );

        widget.on_grab(PointerPosition::new(200, 300));
        assert_eq!(
            widget.on_move(PointerPosition::new(215, 290)),
            Some(Position::new(25.0, 10.0))
        );
        assert_eq!(
            widget.on_move(PointerPosition::new(150, 310)),
            Some(Position::new(-40.0, 30.0))
        );
        assert!(widget.on_release());

        let reloaded =
            DraggablePosition::load(store_over(&prefs), POMODORO_DOCK_KEY, Position::default());
        assert_eq!(reloaded.position(), Position::new(-40.0, 30.0));
    }

    #[test]
    fn moves_without_session_are_ignored() {
        let mut widget =
            DraggablePosition::load(PersistentStore::memory(), "k", Position::new(1.0, 1.0));
        assert_eq!(widget.on_move(PointerPosition::new(50, 50)), None);
        assert!(!widget.on_release());

        widget.on_grab(PointerPosition::new(0, 0));
        widget.on_release();
        assert_eq!(widget.on_move(PointerPosition::new(50, 50)), None);
        assert_eq!(widget.position(), Position::new(1.0, 1.0));
    }

    #[test]
    fn second_grab_starts_from_the_latest_position() {
        let mut widget = DraggablePosition::load(PersistentStore::memory(), "k", Position::default());
        widget.on_grab(PointerPosition::new(0, 0));
        widget.on_move(PointerPosition::new(10, 10));
        widget.on_release();

        widget.on_grab(PointerPosition::new(100, 100));
        assert_eq!(
            widget.on_move(PointerPosition::new(105, 100)),
            Some(Position::new(15.0, 10.0))
        );
    }

    #[test]
    fn instances_with_different_keys_are_independent() {
        let prefs = MemoryPrefsStore::default();
        let mut first = DraggablePosition::load(store_over(&prefs), "a", Position::default());
        let mut second = DraggablePosition::load(store_over(&prefs), "b", Position::default());

        first.on_grab(PointerPosition::new(0, 0));
        assert_eq!(second.on_move(PointerPosition::new(9, 9)), None);
        first.on_move(PointerPosition::new(3, 4));

        assert_eq!(second.position(), Position::default());
        assert_eq!(
            DraggablePosition::load(store_over(&prefs), "a", Position::default()).position(),
            Position::new(3.0, 4.0)
        );
    }
}
