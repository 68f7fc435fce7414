//! Translation table construction and lookup.

use std::collections::HashMap;

use serde_json::Value;

/// Flat key→text mapping for exactly one language.
///
/// Built by flattening nested translation JSON into separator-joined keys
/// (e.g., "hero.title"). A key can be absent; lookups make that a visible
/// `None` so callers can keep whatever text is already displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Flattened entries.
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// A table with zero entries (terminal fallback when nothing loads).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flattens parsed translation JSON into a table.
    ///
    /// Nested objects become separator-joined keys, arrays become indexed
    /// keys ("fleet[0]"), and non-string leaves are stringified.
    #[must_use]
    pub fn from_json(json: &Value, separator: &str) -> Self {
        let mut entries = HashMap::new();
        flatten_value(json, separator, None, &mut entries);
        Self { entries }
    }

    /// Looks up the display text for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Looks up `key` and substitutes `{{name}}` placeholders with `params`.
    #[must_use]
    pub fn render(&self, key: &str, params: &[(&str, &str)]) -> Option<String> {
        let text = self.get(key)?;
        let mut rendered = text.to_string();
        for (name, value) in params {
            rendered = rendered.replace(&format!("{{{{{name}}}}}"), value);
        }
        Some(rendered)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Recursive worker behind `TranslationTable::from_json`.
fn flatten_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    entries: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_value(value, separator, Some(&full_key), entries);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_value(value, separator, Some(&full_key), entries);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                entries.insert(key.to_string(), text.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                entries.insert(key.to_string(), json.to_string());
            }
        }
    }
}
