//! Core types used throughout the runtime.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A short identifier for a supported language (e.g., "en", "es").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a code from a string that is already in canonical form.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Normalizes a raw locale tag into a code.
    ///
    /// Strips encoding/modifier suffixes, lowercases, and unifies the
    /// subtag separator (e.g., "en_US.UTF-8" → "en-us").
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Self {
        let stripped = tag.split(['.', '@']).next().unwrap_or(tag);
        Self(stripped.trim().to_lowercase().replace('_', "-"))
    }

    /// The base subtag of the code (e.g., "en-us" → "en").
    #[must_use]
    pub fn base(&self) -> Self {
        Self(self.0.split('-').next().unwrap_or(&self.0).to_string())
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata for one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Code used for lookups, resources, and persistence.
    pub code: LanguageCode,
    /// English name (e.g., "Spanish").
    pub name: String,
    /// Name in the language itself (e.g., "Español"); shown by the selector.
    pub native_name: String,
    /// Emoji flag shown next to the native name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

/// Fixed, ordered set of languages the site can render.
///
/// The order is the display order of the selector widget.
#[derive(Debug, Clone)]
pub struct SupportedLanguages {
    /// Entries in display order.
    entries: Vec<Language>,
    /// The fallback language; always a member of `entries`.
    default: Language,
}

impl SupportedLanguages {
    /// Builds the set from an ordered list and the code of the default
    /// language.
    ///
    /// Returns `None` when the list is empty or the default is not a member.
    #[must_use]
    pub fn new(entries: Vec<Language>, default_code: &LanguageCode) -> Option<Self> {
        let default = entries.iter().find(|language| language.code == *default_code)?.clone();
        Some(Self { entries, default })
    }

    /// The language used when nothing else resolves.
    #[must_use]
    pub const fn default_language(&self) -> &Language {
        &self.default
    }

    /// Looks up a language by exact code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Language> {
        self.entries.iter().find(|language| language.code.as_str() == code)
    }

    /// Whether `code` is a member of the set.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.entries.iter()
    }

    /// Number of supported languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty (never true for a value built by `new`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
