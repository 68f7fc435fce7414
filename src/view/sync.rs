//! Applies a translation table to a document.

use std::sync::{
    Arc,
    Mutex,
};

use super::document::Document;
use crate::catalog::TranslationTable;
use crate::state::{
    LanguageChange,
    LanguageListener,
};
use crate::types::{
    Language,
    SupportedLanguages,
};

/// Rewrites every bound surface of `document` for `language`.
///
/// A key missing from `table` leaves the current value untouched; an
/// element never goes blank and never shows the key itself. Safe to call
/// repeatedly with the same table.
pub fn apply(document: &mut Document, language: &Language, table: &TranslationTable) {
    for element in &mut document.elements {
        if let Some(key) = &element.text_key
            && let Some(text) = table.get(key)
        {
            element.text = text.to_string();
        }
        if let Some(key) = &element.placeholder_key
            && let Some(text) = table.get(key)
        {
            element.placeholder = Some(text.to_string());
        }
    }

    document.lang = language.code.as_str().to_string();
    document.selector_label = language.native_name.clone();
    for option in &mut document.selector_options {
        option.active = option.code == language.code;
    }
}

/// Subscriber that keeps a shared document in sync with the active
/// language.
#[derive(Debug)]
pub struct DocumentSynchronizer {
    /// 同期対象のドキュメント
    document: Arc<Mutex<Document>>,
    /// 表示名の導出に使う対応言語の集合
    languages: Arc<SupportedLanguages>,
}

impl DocumentSynchronizer {
    /// Creates a synchronizer for a shared document.
    #[must_use]
    pub const fn new(document: Arc<Mutex<Document>>, languages: Arc<SupportedLanguages>) -> Self {
        Self { document, languages }
    }

    /// Shared handle to the synchronized document.
    #[must_use]
    pub fn document(&self) -> Arc<Mutex<Document>> {
        Arc::clone(&self.document)
    }
}

impl LanguageListener for DocumentSynchronizer {
    fn language_changed(&self, change: &LanguageChange<'_>) {
        let language = self
            .languages
            .get(change.language.as_str())
            .unwrap_or_else(|| self.languages.default_language());
        match self.document.lock() {
            Ok(mut document) => apply(&mut document, language, change.table),
            Err(err) => tracing::warn!("Skipping view sync, document lock poisoned: {}", err),
        }
    }
}
