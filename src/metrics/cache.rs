//! Memoized string widths.
//!
//! Only the width lookups are cached. Paragraph layouts are rebuilt on every
//! query so that a cell whose text or font changed never reports stale lines.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::{MetricsError, TextMetrics};
use crate::types::Font;

/// Width cache capacity used by [`CachedMetrics::new`].
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Fixed-capacity cache that evicts in insertion order.
///
/// Lookups do not promote entries. A capacity of 0 disables caching.
#[derive(Debug)]
pub struct LruCache<K: Hash + Eq + Clone, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert unless the key is already present. Returns `true` on insert.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.capacity == 0 || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key.clone(), value);
        self.order.push_back(key);
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Wraps a provider and remembers successful width lookups per `(font, text)`.
///
/// Failed lookups are not cached, so a provider that recovers is asked again.
#[derive(Debug)]
pub struct CachedMetrics<M> {
    inner: M,
    widths: RefCell<LruCache<(Font, String), f32>>,
}

impl<M: TextMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            widths: RefCell::new(LruCache::new(capacity)),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of cached widths.
    pub fn cached(&self) -> usize {
        self.widths.borrow().len()
    }

    pub fn clear(&self) {
        self.widths.borrow_mut().clear();
    }
}

impl<M: TextMetrics> TextMetrics for CachedMetrics<M> {
    fn string_width(&self, font: &Font, text: &str) -> Result<f32, MetricsError> {
        let key = (font.clone(), text.to_string());
        if let Some(width) = self.widths.borrow().get(&key) {
            return Ok(*width);
        }
        let width = self.inner.string_width(font, text)?;
        self.widths.borrow_mut().insert(key, width);
        Ok(width)
    }

    fn line_spacing(&self, font: &Font) -> Result<f32, MetricsError> {
        self.inner.line_spacing(font)
    }
}
