//! Shuffle-bag rotation over a remote media catalog.
//!
//! The bag is a pre-shuffled queue of catalog ids drawn without replacement. It is refilled
//! with a fresh permutation once exhausted, and persisted together with the current selection
//! so a reload continues the same rotation.

use platform_host::{MediaCatalogService, MediaEntry};
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

use crate::persistence::{PersistentStore, MEDIA_BAG_KEY, MEDIA_CURRENT_KEY};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("media catalog fetch failed: {0}")]
    Fetch(String),
}

/// Lists `folder` through the host catalog service.
pub async fn fetch_catalog(
    service: &dyn MediaCatalogService,
    folder: &str,
) -> Result<Vec<MediaEntry>, CatalogError> {
    service.list_media(folder).await.map_err(CatalogError::Fetch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    /// The catalog has not been applied yet.
    Loading,
    /// The catalog is empty or could not be fetched.
    NoMedia,
    Ready,
}

#[derive(Debug, Clone)]
pub struct MediaRotationPool {
    store: PersistentStore,
    catalog: Option<Vec<MediaEntry>>,
    current_url: Option<String>,
    bag: Vec<String>,
}

impl MediaRotationPool {
    /// Restores the persisted current selection and bag. The catalog is applied separately once
    /// fetched.
    ///
    /// A stored bag that is not an array reads as empty; entries that are not strings are skipped.
    pub fn load(store: PersistentStore) -> Self {
        let current_url = store
            .get_raw(MEDIA_CURRENT_KEY)
            .filter(|url| !url.trim().is_empty());
        let bag = store
            .get::<Vec<Value>>(MEDIA_BAG_KEY)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match value {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect();
        Self {
            store,
            catalog: None,
            current_url,
            bag,
        }
    }

    pub fn status(&self) -> MediaStatus {
        match &self.catalog {
            None => MediaStatus::Loading,
            Some(entries) if entries.is_empty() => MediaStatus::NoMedia,
            Some(_) => MediaStatus::Ready,
        }
    }

    pub fn catalog(&self) -> &[MediaEntry] {
        self.catalog.as_deref().unwrap_or_default()
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Id of the current selection when it is still part of the catalog.
    pub fn current_id(&self) -> Option<&str> {
        let url = self.current_url.as_deref()?;
        self.catalog()
            .iter()
            .find(|entry| entry.url == url)
            .map(|entry| entry.id.as_str())
    }

    /// Installs a fetched catalog; failures degrade to an empty catalog.
    ///
    /// With no persisted selection, the first entry becomes current without touching the bag.
    pub fn apply_catalog(&mut self, fetched: Result<Vec<MediaEntry>, CatalogError>) {
        let entries = fetched.unwrap_or_else(|err| {
            leptos::logging::warn!("{err}");
            Vec::new()
        });
        if self.current_url.is_none() {
            if let Some(first) = entries.first() {
                self.current_url = Some(first.url.clone());
                self.store.set_raw(MEDIA_CURRENT_KEY, &first.url);
            }
        }
        self.catalog = Some(entries);
    }

    /// Advances the rotation and returns the new current entry.
    ///
    /// Bag ids that left the catalog are dropped first; an exhausted bag is refilled with a fresh
    /// permutation of the full catalog. Returns `None` while the catalog is empty. The bag lives
    /// in memory and a failed write only loses it across reloads.
    pub fn pick_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MediaEntry> {
        let catalog = self.catalog.as_deref().filter(|entries| !entries.is_empty())?;

        self.bag.retain(|id| catalog.iter().any(|entry| &entry.id == id));
        if self.bag.is_empty() {
            self.bag = shuffle_ids(catalog, rng);
        }

        let next_id = self.bag.remove(0);
        let next = catalog
            .iter()
            .find(|entry| entry.id == next_id)
            .unwrap_or(&catalog[0])
            .clone();

        self.store.set(MEDIA_BAG_KEY, &self.bag);
        self.store.set_raw(MEDIA_CURRENT_KEY, &next.url);
        self.current_url = Some(next.url.clone());
        Some(next)
    }

    /// Ids still waiting in the bag, front first.
    pub fn pending_ids(&self) -> &[String] {
        &self.bag
    }
}

/// Uniform Fisher–Yates permutation of the catalog ids.
pub fn shuffle_ids<R: Rng + ?Sized>(entries: &[MediaEntry], rng: &mut R) -> Vec<String> {
    let mut ids: Vec<String> = entries.iter().map(|entry| entry.id.clone()).collect();
    for i in (1..ids.len()).rev() {
        let j = rng.gen_range(0..=i);
        ids.swap(i, j);
    }
    ids
}

/// Status line shown when nothing can play.
pub fn no_media_message(folder: &str) -> String {
    format!("No videos found in media folder: {folder}/")
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, rc::Rc};

    use futures::executor::block_on;
    use platform_host::{MemoryMediaCatalogService, MemoryPrefsStore};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::persistence::test_support::UnavailablePrefsStore;

    fn entries(ids: &[&str]) -> Vec<MediaEntry> {
        ids.iter()
            .map(|id| MediaEntry::new(*id, format!("https://media.test/{id}.mp4")))
            .collect()
    }

    fn pool_over(prefs: &MemoryPrefsStore) -> MediaRotationPool {
        MediaRotationPool::load(PersistentStore::new(Rc::new(prefs.clone())))
    }

    #[test]
    fn status_tracks_catalog_lifecycle() {
        let mut pool = MediaRotationPool::load(PersistentStore::memory());
        assert_eq!(pool.status(), MediaStatus::Loading);
        pool.apply_catalog(Ok(Vec::new()));
        assert_eq!(pool.status(), MediaStatus::NoMedia);
        pool.apply_catalog(Ok(entries(&["a"])));
        assert_eq!(pool.status(), MediaStatus::Ready);
    }

    #[test]
    fn fetch_failure_degrades_to_no_media() {
        let service = MemoryMediaCatalogService::default();
        service.set_failure(Some("503"));
        let fetched = block_on(fetch_catalog(&service, "cafe-wall"));
        assert_eq!(fetched, Err(CatalogError::Fetch("503".to_string())));

        let mut pool = MediaRotationPool::load(PersistentStore::memory());
        pool.apply_catalog(fetched);
        assert_eq!(pool.status(), MediaStatus::NoMedia);
        assert_eq!(pool.pick_next(&mut StdRng::seed_from_u64(1)), None);
        assert_eq!(pool.current_url(), None);
    }

    #[test]
    fn first_mount_seeds_current_without_consuming_the_bag() {
        let prefs = MemoryPrefsStore::default();
        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(entries(&["a", "b", "c"])));

        assert_eq!(pool.current_id(), Some("a"));
        assert_eq!(
            prefs.raw(MEDIA_CURRENT_KEY).as_deref(),
            Some("https://media.test/a.mp4")
        );
        assert_eq!(prefs.raw(MEDIA_BAG_KEY), None);
    }

    #[test]
    fn persisted_selection_is_kept_on_mount() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(MEDIA_CURRENT_KEY, "https://media.test/b.mp4");
        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(entries(&["a", "b", "c"])));
        assert_eq!(pool.current_id(), Some("b"));
    }

    #[test]
    fn three_picks_cover_the_catalog_without_repeats() {
        let prefs = MemoryPrefsStore::default();
        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(entries(&["a", "b", "c"])));
        let mut rng = StdRng::seed_from_u64(7);

        let picked: HashSet<String> = (0..3)
            .filter_map(|_| pool.pick_next(&mut rng))
            .map(|entry| entry.id)
            .collect();
        assert_eq!(picked.len(), 3);
        assert!(pool.pending_ids().is_empty());

        let fourth = pool.pick_next(&mut rng).expect("reshuffled");
        assert!(["a", "b", "c"].contains(&fourth.id.as_str()));
        assert_eq!(pool.pending_ids().len(), 2);
        assert!(!pool.pending_ids().contains(&fourth.id));
    }

    #[test]
    fn rotation_resumes_across_reload() {
        let prefs = MemoryPrefsStore::default();
        let catalog = entries(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(catalog.clone()));
        let first = pool.pick_next(&mut rng).expect("pick");

        let mut reloaded = pool_over(&prefs);
        reloaded.apply_catalog(Ok(catalog));
        assert_eq!(reloaded.current_id(), Some(first.id.as_str()));

        let mut seen = vec![first.id];
        for _ in 0..3 {
            seen.push(reloaded.pick_next(&mut rng).expect("pick").id);
        }
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn stale_ids_are_filtered_when_the_catalog_shrinks() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(MEDIA_BAG_KEY, r#"["gone","b","also-gone"]"#);
        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(entries(&["a", "b"])));

        let next = pool.pick_next(&mut StdRng::seed_from_u64(3)).expect("pick");
        assert_eq!(next.id, "b");
        assert!(pool.pending_ids().is_empty());
    }

    #[test]
    fn non_string_bag_entries_are_skipped() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(MEDIA_BAG_KEY, r#"["c",5,null,"a"]"#);
        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(entries(&["a", "b", "c"])));
        assert_eq!(pool.pending_ids(), &["c".to_string(), "a".to_string()]);

        let next = pool.pick_next(&mut StdRng::seed_from_u64(5)).expect("pick");
        assert_eq!(next.id, "c");
        assert_eq!(prefs.raw(MEDIA_BAG_KEY).as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn bag_is_kept_in_memory_when_storage_is_unavailable() {
        for seed in 0..50 {
            let store = PersistentStore::new(Rc::new(UnavailablePrefsStore));
            let mut pool = MediaRotationPool::load(store);
            pool.apply_catalog(Ok(entries(&["a", "b", "c"])));
            let mut rng = StdRng::seed_from_u64(seed);

            let mut picks: Vec<String> = (0..3)
                .filter_map(|_| pool.pick_next(&mut rng))
                .map(|entry| entry.id)
                .collect();
            picks.sort();
            assert_eq!(picks, vec!["a", "b", "c"], "seed {seed}");
            assert!(pool.current_url().is_some());
        }
    }

    #[test]
    fn malformed_bag_is_treated_as_empty() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(MEDIA_BAG_KEY, "{oops");
        let mut pool = pool_over(&prefs);
        pool.apply_catalog(Ok(entries(&["only"])));
        assert_eq!(
            pool.pick_next(&mut StdRng::seed_from_u64(0)).map(|e| e.id),
            Some("only".to_string())
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let catalog = entries(&["a", "b", "c", "d", "e", "f"]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let mut ids = shuffle_ids(&catalog, &mut rng);
            ids.sort();
            assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f"]);
        }
        assert!(shuffle_ids(&[], &mut rng).is_empty());
    }

    #[test]
    fn no_media_message_names_the_folder() {
        assert_eq!(
            no_media_message("cafe-wall"),
            "No videos found in media folder: cafe-wall/"
        );
    }
}
