//! View model for the translatable parts of a page.
//!
//! Stand-in for the page markup: an element carries the bindings the
//! marker attributes (`data-i18n`, `data-i18n-placeholder`) declare,
//! as explicit optional keys.

use crate::types::{
    LanguageCode,
    SupportedLanguages,
};

/// One translatable element of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Stable identifier used by tests and diagnostics, not by lookup.
    pub name: String,
    /// Currently displayed text.
    pub text: String,
    /// Translation key bound to the text content.
    pub text_key: Option<String>,
    /// Currently displayed placeholder value, for input-like elements.
    pub placeholder: Option<String>,
    /// Translation key bound to the placeholder value.
    pub placeholder_key: Option<String>,
}

impl Element {
    /// Element whose text content is bound to `key`.
    #[must_use]
    pub fn text_bound(name: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            text: String::new(),
            text_key: Some(key.to_string()),
            placeholder: None,
            placeholder_key: None,
        }
    }

    /// Input-like element whose placeholder is bound to `key`.
    #[must_use]
    pub fn placeholder_bound(name: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            text: String::new(),
            text_key: None,
            placeholder: Some(String::new()),
            placeholder_key: Some(key.to_string()),
        }
    }

    /// Unbound element; the synchronizer never touches it.
    #[must_use]
    pub fn unbound(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            text_key: None,
            placeholder: None,
            placeholder_key: None,
        }
    }
}

/// Selector surface for one supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    /// Language this option selects.
    pub code: LanguageCode,
    /// Native name shown in the dropdown.
    pub label: String,
    /// Whether this option is highlighted as the active language.
    pub active: bool,
}

/// The translatable surface of one rendered page.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document language attribute (the `<html lang>` analog).
    pub lang: String,
    /// Translatable elements in document order.
    pub elements: Vec<Element>,
    /// Label of the selector trigger (native name of the active language).
    pub selector_label: String,
    /// One option per supported language, in display order.
    pub selector_options: Vec<SelectorOption>,
}

impl Document {
    /// Empty document with selector options for every supported language.
    #[must_use]
    pub fn new(languages: &SupportedLanguages) -> Self {
        let selector_options = languages
            .iter()
            .map(|language| SelectorOption {
                code: language.code.clone(),
                label: language.native_name.clone(),
                active: false,
            })
            .collect();
        Self {
            lang: String::new(),
            elements: Vec::new(),
            selector_label: String::new(),
            selector_options,
        }
    }

    /// Appends an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Finds an element by name.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.name == name)
    }

    /// The currently highlighted selector option, if any.
    #[must_use]
    pub fn active_option(&self) -> Option<&SelectorOption> {
        self.selector_options.iter().find(|option| option.active)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::types::Language;

    /// テスト用の対応言語集合
    fn languages() -> SupportedLanguages {
        let entries = vec![
            Language {
                code: LanguageCode::new("en"),
                name: "English".to_string(),
                native_name: "English".to_string(),
                flag: None,
            },
            Language {
                code: LanguageCode::new("es"),
                name: "Spanish".to_string(),
                native_name: "Español".to_string(),
                flag: None,
            },
        ];
        SupportedLanguages::new(entries, &LanguageCode::new("en")).unwrap()
    }

    #[googletest::test]
    fn new_document_has_one_option_per_language() {
        let document = Document::new(&languages());

        expect_that!(document.selector_options, len(eq(2)));
        expect_that!(document.active_option(), none());
        expect_that!(
            document.selector_options.first().map(|option| option.label.as_str()),
            some(eq("English"))
        );
    }

    #[googletest::test]
    fn element_lookup_by_name() {
        let mut document = Document::new(&languages());
        document.push(Element::text_bound("hero-title", "hero.title"));

        expect_that!(document.element("hero-title"), some(anything()));
        expect_that!(document.element("missing"), none());
    }

    #[googletest::test]
    fn unbound_element_keeps_its_text() {
        let element = Element::unbound("brand", "SOYTUTAXI");

        expect_that!(element.text, eq("SOYTUTAXI"));
        expect_that!(element.text_key, none());
        expect_that!(element.placeholder_key, none());
    }
}
