// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization for deterministic measurers.

extern crate alloc;

use alloc::string::String;
use core::cell::{Cell, RefCell};

use hashbrown::HashMap;

use crate::{FontFamily, FontWeight, TextMeasurer, TextSize, TextStyle};

/// Default number of entries a [`CachedTextMeasurer`] holds before it resets.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Wraps a [`TextMeasurer`] and caches results by their full input tuple.
///
/// Guide computation measures every sibling on every drag update, while the
/// overlays themselves rarely change during a gesture, so most lookups hit.
/// Floats are keyed by their bit patterns; `0.0` and `-0.0` are distinct keys.
///
/// Text edits, resizes and canvas changes keep producing new keys. Once the
/// cache holds `capacity` entries the next miss empties it before inserting,
/// so memory stays bounded without per-entry bookkeeping.
#[derive(Debug)]
pub struct CachedTextMeasurer<M> {
    inner: M,
    entries: RefCell<HashMap<MeasureKey, TextSize>>,
    capacity: usize,
    hits: Cell<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    font_size: u64,
    font_family: FontFamily,
    font_weight: FontWeight,
    scale: u64,
    max_width: u64,
}

impl<M: TextMeasurer> CachedTextMeasurer<M> {
    /// Creates an empty cache in front of `inner` holding up to
    /// [`DEFAULT_CACHE_CAPACITY`] entries.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            entries: RefCell::new(HashMap::new()),
            capacity: DEFAULT_CACHE_CAPACITY,
            hits: Cell::new(0),
        }
    }

    /// Sets the entry count at which the cache resets (at least 1).
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// The entry count at which the cache resets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the wrapped measurer.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of cached measurements.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Drops every cached measurement.
    ///
    /// Call this when the underlying font configuration changes.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedTextMeasurer<M> {
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize {
        let key = MeasureKey {
            text: String::from(text),
            font_size: style.font_size.to_bits(),
            font_family: style.font_family.clone(),
            font_weight: style.font_weight,
            scale: scale.to_bits(),
            max_width: max_width.to_bits(),
        };
        if let Some(size) = self.entries.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return *size;
        }
        let size = self.inner.measure(text, style, scale, max_width);
        let mut entries = self.entries.borrow_mut();
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert(key, size);
        size
    }
}
