//! Per-locale memoization of resolved content documents.

use crate::document::AboutContent;
use crate::Locale;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe memoization map from locale to resolved document.
///
/// Entries are written once per locale and never updated afterwards.
/// Concurrent first-time resolutions of the same locale may both compute
/// and write; the computation is pure, so the duplicate write stores an
/// equal value.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: RwLock<HashMap<Locale, Arc<AboutContent>>>,
}

impl ContentCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached document for a locale
    pub fn get(&self, locale: Locale) -> Option<Arc<AboutContent>> {
        self.entries.read().unwrap().get(&locale).cloned()
    }

    /// Store the resolved document for a locale
    pub fn insert(&self, locale: Locale, document: Arc<AboutContent>) {
        self.entries.write().unwrap().insert(locale, document);
    }

    /// Check whether a locale has been resolved
    pub fn contains(&self, locale: Locale) -> bool {
        self.entries.read().unwrap().contains_key(&locale)
    }

    /// Get all cached locales
    pub fn locales(&self) -> Vec<Locale> {
        self.entries.read().unwrap().keys().copied().collect()
    }

    /// Number of cached locales
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Drop all entries. Intended for tests and content redeploys.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}
