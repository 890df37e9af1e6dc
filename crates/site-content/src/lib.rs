//! Locale-aware content resolution for the marketing site
//!
//! This crate produces complete, render-ready content documents for any
//! supported locale. It includes:
//!
//! - A fixed-shape content schema with partial override mirror types
//! - Override loading from per-locale JSON files or in-memory sources
//! - Field-level merging with baseline fallback for missing translations
//! - Length-gated reconciliation for list-valued fields
//! - Per-locale memoization of resolved documents
//!
//! # Example
//!
//! ```rust,no_run
//! use site_content::{ContentResolver, Locale};
//!
//! let resolver = ContentResolver::with_directory("locales");
//! let content = resolver.resolve(Locale::Spanish);
//! println!("{}", content.hero.title);
//! ```

pub mod cache;
pub mod defaults;
pub mod document;
pub mod error;
pub mod loader;
pub mod locale;
pub mod merge;
pub mod resolver;

pub use cache::ContentCache;
pub use defaults::english_baseline;
pub use document::{AboutContent, AboutOverride};
pub use error::{ContentError, ContentResult};
pub use loader::{DirectoryLoader, OverrideLoader, StaticOverrides};
pub use locale::Locale;
pub use merge::merge_document;
pub use resolver::ContentResolver;
