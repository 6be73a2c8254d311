//! Hot-reload invalidation tracking.
//!
//! The host only knows which *file* changed; this module remembers which
//! derived virtual modules (inline components, per-document stylesheets)
//! were actually requested for each source, so a change invalidates exactly
//! the stale consumers and nothing else.

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Path, PathBuf};

/// The host bundler's live module graph, at the seam this pipeline needs:
/// look a module up by id and mark it stale.
pub trait ModuleGraph {
    /// Mark the module invalid. Returns whether a live module with this id
    /// existed.
    fn invalidate(&self, id: &str) -> bool;
}

/// Source path -> derived module ids requested since the last invalidation.
///
/// The main module is not tracked here; the parse cache key covers it.
#[derive(Debug, Default)]
pub struct InvalidationTracker {
    derived: RwLock<FxHashMap<PathBuf, FxHashSet<String>>>,
}

impl InvalidationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a derived module of `source` was requested.
    pub fn track(&self, source: &Path, id: String) {
        self.derived
            .write()
            .entry(source.to_path_buf())
            .or_default()
            .insert(id);
    }

    /// Remove and return every tracked derived id for `source`, sorted for
    /// deterministic invalidation order. Empty if nothing was ever tracked.
    pub fn drain(&self, source: &Path) -> Vec<String> {
        let mut ids: Vec<String> = self
            .derived
            .write()
            .remove(source)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Number of derived ids currently tracked for `source`.
    pub fn tracked(&self, source: &Path) -> usize {
        self.derived.read().get(source).map_or(0, FxHashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_deduplicates() {
        let tracker = InvalidationTracker::new();
        let source = Path::new("/docs/a.norg");

        tracker.track(source, "/docs/a.norg.svelte?inline=0".into());
        tracker.track(source, "/docs/a.norg.svelte?inline=0".into());
        tracker.track(source, "/docs/a.norg.svelte?inline=1".into());

        assert_eq!(tracker.tracked(source), 2);
    }

    #[test]
    fn test_drain_empties_and_sorts() {
        let tracker = InvalidationTracker::new();
        let source = Path::new("/docs/a.norg");

        tracker.track(source, "/docs/a.norg.svelte?inline=1".into());
        tracker.track(source, "/docs/a.norg.svelte?inline=0".into());

        let ids = tracker.drain(source);
        assert_eq!(
            ids,
            vec![
                "/docs/a.norg.svelte?inline=0".to_string(),
                "/docs/a.norg.svelte?inline=1".to_string(),
            ]
        );
        assert_eq!(tracker.tracked(source), 0);
        assert!(tracker.drain(source).is_empty());
    }

    #[test]
    fn test_sources_tracked_independently() {
        let tracker = InvalidationTracker::new();
        tracker.track(Path::new("/a.norg"), "/a.norg.vue?inline=0".into());
        tracker.track(Path::new("/b.norg"), "/b.norg.vue?inline=0".into());

        assert_eq!(tracker.drain(Path::new("/a.norg")).len(), 1);
        assert_eq!(tracker.tracked(Path::new("/b.norg")), 1);
    }
}
