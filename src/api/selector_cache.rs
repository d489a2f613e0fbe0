use std::collections::VecDeque;
use std::sync::Arc;

/// Runtime metrics exposed by one memoized selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Metrics for every memoized selector of a [`super::TooltipSelectors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipSelectorStats {
    pub configurations: SelectorCacheStats,
    pub payloads: SelectorCacheStats,
    pub projections: SelectorCacheStats,
}

/// Identity key for reference-counted inputs: equal only to clones of the
/// same allocation. Holding the `Arc` keeps the address from being reused
/// while the entry lives.
#[derive(Debug)]
pub(super) struct SameArc<T: ?Sized>(pub(super) Arc<T>);

impl<T: ?Sized> Clone for SameArc<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for SameArc<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Small memo table keyed by structural/identity equality.
///
/// Keys only need `PartialEq`, since inputs hold JSON values and shared
/// pointers. The oldest entry is evicted once the table is full, so the most
/// recent inputs of each selector call site keep returning the same `Arc`.
#[derive(Debug)]
pub(super) struct SelectorCache<K, V> {
    entries: VecDeque<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for SelectorCache<K, V> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V: Clone> SelectorCache<K, V> {
    const MAX_ENTRIES: usize = 16;

    pub(super) fn get(&mut self, key: &K) -> Option<V> {
        let value = self
            .entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.clone());
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: K, value: V) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back((key, value));
    }

    pub(super) fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> SelectorCacheStats {
        SelectorCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
