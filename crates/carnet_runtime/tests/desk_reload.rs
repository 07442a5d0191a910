//! Café desk widgets surviving a simulated page reload over one shared preference store.

use std::rc::Rc;

use carnet_runtime::{
    fetch_catalog, DraggablePosition, MediaRotationPool, NoteLayout, PersistentStore,
    PointerPosition, PomodoroPhase, PomodoroTimer, Position, SiteConfig, StickyNoteCollection,
};
use futures::executor::block_on;
use platform_host::{MediaEntry, MemoryMediaCatalogService, MemoryPrefsStore};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};

const T0: u64 = 1_760_000_000_000;
const DOCK_KEY: &str = "cafe-pomo-pos-v1";

fn store_over(prefs: &MemoryPrefsStore) -> PersistentStore {
    PersistentStore::new(Rc::new(prefs.clone()))
}

#[test]
fn desk_state_is_restored_after_reload() {
    let prefs = MemoryPrefsStore::default();
    let cafe = SiteConfig::builtin().cafe;

    let mut timer = PomodoroTimer::hydrate(store_over(&prefs), cafe.pomodoro_seconds, T0);
    timer.start(T0);

    let mut dock = DraggablePosition::load(store_over(&prefs), DOCK_KEY, cafe.pomo_dock_default());
    dock.on_grab(PointerPosition::new(10, 10));
    dock.on_move(PointerPosition::new(130, 70));
    dock.on_release();

    let mut notes = StickyNoteCollection::load(store_over(&prefs), NoteLayout::from_config(&cafe));
    let id = notes.add_note();
    notes.update_text(&id, "call the bakery");

    // reload 42.5 seconds later
    let timer = PomodoroTimer::hydrate(store_over(&prefs), cafe.pomodoro_seconds, T0 + 42_500);
    assert_eq!(timer.remaining_seconds(), 1458);
    assert_eq!(timer.phase(), PomodoroPhase::Running);

    let dock = DraggablePosition::load(store_over(&prefs), DOCK_KEY, cafe.pomo_dock_default());
    assert_eq!(dock.position(), Position::new(120.0, 60.0));

    let notes = StickyNoteCollection::load(store_over(&prefs), NoteLayout::from_config(&cafe));
    assert_eq!(notes.len(), 1);
    assert_eq!(notes.get(&id).map(|note| note.text.as_str()), Some("call the bakery"));
}

#[test]
fn media_rotation_follows_the_catalog_between_sessions() {
    let prefs = MemoryPrefsStore::default();
    let service = MemoryMediaCatalogService::default();
    let folder = SiteConfig::builtin().cafe.media_folder;
    service.set_folder(
        &folder,
        vec![
            MediaEntry::new("cafe-wall/rain.mp4", "https://media.test/rain.mp4"),
            MediaEntry::new("cafe-wall/tram.mp4", "https://media.test/tram.mp4"),
            MediaEntry::new("cafe-wall/steam.mp4", "https://media.test/steam.mp4"),
        ],
    );
    let mut rng = StdRng::seed_from_u64(2024);

    let mut pool = MediaRotationPool::load(store_over(&prefs));
    pool.apply_catalog(block_on(fetch_catalog(&service, &folder)));
    assert_eq!(pool.current_id(), Some("cafe-wall/rain.mp4"));
    pool.pick_next(&mut rng).expect("first pick");

    // A clip disappears before the next visit.
    service.set_folder(
        &folder,
        vec![MediaEntry::new("cafe-wall/steam.mp4", "https://media.test/steam.mp4")],
    );
    let mut pool = MediaRotationPool::load(store_over(&prefs));
    pool.apply_catalog(block_on(fetch_catalog(&service, &folder)));
    for _ in 0..3 {
        let next = pool.pick_next(&mut rng).expect("pick");
        assert_eq!(next.id, "cafe-wall/steam.mp4");
    }

    service.set_failure(Some("network down"));
    let mut pool = MediaRotationPool::load(store_over(&prefs));
    pool.apply_catalog(block_on(fetch_catalog(&service, &folder)));
    assert!(pool.catalog().is_empty());
    assert_eq!(pool.current_url(), Some("https://media.test/steam.mp4"));
}
