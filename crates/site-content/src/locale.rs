//! Locale management and utilities

use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Italian,
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// Get the language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Spanish => "es-ES",
            Self::French => "fr-FR",
            Self::German => "de-DE",
            Self::Portuguese => "pt-BR",
            Self::Italian => "it-IT",
        }
    }

    /// Get the short language code for this locale
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Portuguese => "pt",
            Self::Italian => "it",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "es" | "es-ES" => Some(Self::Spanish),
            "fr" | "fr-FR" => Some(Self::French),
            "de" | "de-DE" => Some(Self::German),
            "pt" | "pt-BR" => Some(Self::Portuguese),
            "it" | "it-IT" => Some(Self::Italian),
            _ => None,
        }
    }

    /// Convert to a LanguageIdentifier for the rendering layer
    pub fn to_language_identifier(&self) -> ContentResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| ContentError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![
            Self::English,
            Self::Spanish,
            Self::French,
            Self::German,
            Self::Portuguese,
            Self::Italian,
        ]
    }

    /// Get the display name for this locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
            Self::French => "Français",
            Self::German => "Deutsch",
            Self::Portuguese => "Português",
            Self::Italian => "Italiano",
        }
    }

    /// Get the override file name for this locale
    pub fn override_file(&self) -> String {
        format!("{}/about.json", self.short_code())
    }
}
