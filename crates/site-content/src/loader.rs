//! Loading of locale override documents

use crate::document::AboutOverride;
use crate::error::{ContentError, ContentResult};
use crate::Locale;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of locale override documents.
///
/// `Ok(None)` means the locale has no override, which is a normal
/// condition (the English baseline covers it). `Err` means an override
/// appears to exist but could not be used; the resolver treats both
/// outcomes identically.
pub trait OverrideLoader {
    /// Load the override document for the given locale, if one exists.
    fn load_override(&self, locale: Locale) -> ContentResult<Option<AboutOverride>>;
}

/// Loads override documents from per-locale JSON files on disk.
///
/// Files live at `<base_dir>/<code>/about.json`, e.g. `locales/es/about.json`.
#[derive(Debug)]
pub struct DirectoryLoader {
    /// Base directory for locale overrides
    base_dir: PathBuf,
}

impl DirectoryLoader {
    /// Create a new DirectoryLoader
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the base directory for overrides
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl OverrideLoader for DirectoryLoader {
    fn load_override(&self, locale: Locale) -> ContentResult<Option<AboutOverride>> {
        let path = self.base_dir.join(locale.override_file());

        debug!("Loading override file: {:?}", path);

        if !path.exists() {
            debug!("No override file for locale {:?}: {:?}", locale, path);
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| {
            warn!("Failed to read override file {:?}: {}", path, source);
            ContentError::OverrideReadError {
                path: path.to_string_lossy().to_string(),
                source,
            }
        })?;

        let overlay = serde_json::from_str(&content).map_err(|source| {
            warn!("Failed to parse override document {:?}: {}", path, source);
            ContentError::OverrideParseError {
                path: path.to_string_lossy().to_string(),
                source,
            }
        })?;

        debug!("Loaded override for locale: {:?}", locale);
        Ok(Some(overlay))
    }
}

impl Default for DirectoryLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}

/// In-memory override source, for tests and embedded content.
#[derive(Debug, Default)]
pub struct StaticOverrides {
    overrides: HashMap<Locale, AboutOverride>,
}

impl StaticOverrides {
    /// Create an empty StaticOverrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override document for a locale
    pub fn with_override(mut self, locale: Locale, overlay: AboutOverride) -> Self {
        self.overrides.insert(locale, overlay);
        self
    }
}

impl OverrideLoader for StaticOverrides {
    fn load_override(&self, locale: Locale) -> ContentResult<Option<AboutOverride>> {
        Ok(self.overrides.get(&locale).cloned())
    }
}
