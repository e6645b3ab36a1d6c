//! Per-page memo caches.
//!
//! [`PageCache`] maps a [`PageId`] to a previously computed value. The
//! navigation service keeps two of them, one for `is_active` results and one
//! for resolved hrefs. Entries live until the cache is cleared, which makes
//! a cache safe only for the lifetime of one request.
//!
//! The cache is backed by [`lru::LruCache`]. It is unbounded by default;
//! [`PageCache::with_capacity`] bounds it, in which case an evicted entry is
//! simply recomputed on its next lookup.
//!
//! [`CacheStats`] counts hits, misses and invalidations.
//!
//! # Examples
//!
//! ```
//! use site_navigator::{Page, PageCache};
//!
//! let page = Page::new("home");
//! let mut cache = PageCache::new();
//! cache.insert(page.id(), "/home".to_string());
//!
//! assert_eq!(cache.get(page.id()).as_deref(), Some("/home"));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::page::PageId;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups that found nothing.
    pub misses: usize,
    /// Number of full invalidations (via [`PageCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate as a value in `0.0..=1.0`; `0.0` before any lookup.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Identity-keyed memo cache.
#[derive(Debug)]
pub struct PageCache<V> {
    entries: LruCache<PageId, V>,
    stats: CacheStats,
}

impl<V: Clone> PageCache<V> {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
            stats: CacheStats::default(),
        }
    }

    /// Create a cache holding at most `capacity` entries.
    ///
    /// A zero capacity means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        let entries = match NonZeroUsize::new(capacity) {
            Some(cap) => LruCache::new(cap),
            None => LruCache::unbounded(),
        };
        Self {
            entries,
            stats: CacheStats::default(),
        }
    }

    /// Look up the value cached for `id`. Updates hit/miss stats.
    pub fn get(&mut self, id: PageId) -> Option<V> {
        if let Some(value) = self.entries.get(&id) {
            self.stats.hits += 1;
            trace_log!("Cache hit for page {}", id);
            Some(value.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Look up without touching stats or recency.
    pub fn peek(&self, id: PageId) -> Option<&V> {
        self.entries.peek(&id)
    }

    pub fn insert(&mut self, id: PageId, value: V) {
        self.entries.put(id, value);
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.entries.contains(&id)
    }

    /// Drop every entry and count one invalidation.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }
}

impl<V: Clone> Default for PageCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    #[test]
    fn test_miss_then_hit() {
        let page = Page::new("a");
        let mut cache = PageCache::new();

        assert_eq!(cache.get(page.id()), None);
        cache.insert(page.id(), true);
        assert_eq!(cache.get(page.id()), Some(true));

        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
        assert!((cache.stats().hit_rate() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_clear_counts_invalidation() {
        let page = Page::new("a");
        let mut cache = PageCache::new();
        cache.insert(page.id(), 1_u8);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_bounded_cache_evicts_least_recent() {
        let (a, b, c) = (Page::new("a"), Page::new("b"), Page::new("c"));
        let mut cache = PageCache::with_capacity(2);
        cache.insert(a.id(), "a");
        cache.insert(b.id(), "b");
        cache.get(a.id());
        cache.insert(c.id(), "c");

        assert!(cache.contains(a.id()));
        assert!(!cache.contains(b.id()));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_peek_does_not_count() {
        let page = Page::new("a");
        let mut cache = PageCache::new();
        cache.insert(page.id(), 3_u32);
        assert_eq!(cache.peek(page.id()), Some(&3));
        assert_eq!(cache.stats().hits, 0);
    }
}
