//! Locale content resolution

use crate::cache::ContentCache;
use crate::defaults::english_baseline;
use crate::document::{AboutContent, AboutOverride};
use crate::loader::{DirectoryLoader, OverrideLoader};
use crate::merge::merge_document;
use crate::Locale;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves complete content documents per locale.
///
/// Overlays a locale's override document onto the always-complete
/// baseline, memoizing the result. Resolution never fails: a missing or
/// unusable override degrades silently to the baseline so a page render
/// is never broken by content problems.
pub struct ContentResolver {
    /// Baseline document, the fallback of last resort
    baseline: AboutContent,
    /// Source of locale override documents
    loader: Box<dyn OverrideLoader + Send + Sync>,
    /// Resolved documents by locale
    cache: ContentCache,
}

impl std::fmt::Debug for ContentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentResolver")
            .field("cached_locales", &self.cache.locales())
            .finish()
    }
}

impl ContentResolver {
    /// Create a resolver with an explicit baseline and override source
    pub fn new(baseline: AboutContent, loader: Box<dyn OverrideLoader + Send + Sync>) -> Self {
        info!("ContentResolver initialized");
        Self {
            baseline,
            loader,
            cache: ContentCache::new(),
        }
    }

    /// Create a resolver over the English baseline and a locale directory
    pub fn with_directory<P: AsRef<Path>>(locales_dir: P) -> Self {
        Self::new(
            english_baseline(),
            Box::new(DirectoryLoader::new(locales_dir)),
        )
    }

    /// Resolve the complete content document for a locale.
    ///
    /// The first call per locale loads and merges the override; later
    /// calls return the memoized document.
    pub fn resolve(&self, locale: Locale) -> Arc<AboutContent> {
        if let Some(document) = self.cache.get(locale) {
            debug!("Cache hit for locale: {:?}", locale);
            return document;
        }

        let overlay = self.load_override(locale);
        let document = Arc::new(merge_document(&self.baseline, &overlay));
        self.cache.insert(locale, Arc::clone(&document));

        debug!("Resolved content for locale: {:?}", locale);
        document
    }

    /// Load the override for a locale, absorbing every failure mode.
    fn load_override(&self, locale: Locale) -> AboutOverride {
        match self.loader.load_override(locale) {
            Ok(Some(overlay)) => overlay,
            Ok(None) => {
                debug!("No override for locale {:?}, using baseline", locale);
                AboutOverride::default()
            }
            Err(e) => {
                warn!(
                    "Override unavailable for locale {:?}, using baseline: {}",
                    locale, e
                );
                AboutOverride::default()
            }
        }
    }

    /// Resolve all supported locales up front
    pub fn preload(&self) {
        for locale in Locale::all() {
            self.resolve(locale);
        }
        info!("Preloaded content for {} locales", self.cache.len());
    }

    /// Get the baseline document
    pub fn baseline(&self) -> &AboutContent {
        &self.baseline
    }

    /// Get the memoization cache
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }
}
