use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::{
    Language,
    LanguageCode,
    SupportedLanguages,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[0].code")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Languages offered by the selector widget, in display order.
    pub languages: Vec<Language>,

    /// Fallback language when no preference or locale resolves.
    /// Must be a member of `languages`.
    pub default_language: LanguageCode,

    /// Directory holding one `<code>.json` resource per language,
    /// relative to the site root.
    pub locales_dir: String,

    /// Separator used when flattening nested translation JSON.
    pub key_separator: String,
}

impl I18nSettings {
    /// # Errors
    /// - No languages configured
    /// - Empty or duplicate language codes
    /// - Default language not in the configured set
    /// - Empty separator or locales directory
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.languages.is_empty() {
            errors.push(ValidationError::new(
                "languages",
                "At least one language is required. Example: [{\"code\": \"en\", \"name\": \"English\", \"nativeName\": \"English\"}]",
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for (index, language) in self.languages.iter().enumerate() {
            if language.code.as_str().is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}].code"),
                    "The language code cannot be empty",
                ));
            } else if !seen.insert(language.code.as_str()) {
                errors.push(ValidationError::new(
                    format!("languages[{index}].code"),
                    format!("Duplicate language code '{}'", language.code),
                ));
            }
            if language.native_name.is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}].nativeName"),
                    "The native name cannot be empty; it is the selector label",
                ));
            }
        }

        if !self.languages.is_empty()
            && !self.languages.iter().any(|language| language.code == self.default_language)
        {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!("'{}' is not one of the configured languages", self.default_language),
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.locales_dir.is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"locales\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Builds the validated, ordered supported-language set.
    ///
    /// Returns `None` when `validate` would reject the language list.
    #[must_use]
    pub fn supported_languages(&self) -> Option<SupportedLanguages> {
        SupportedLanguages::new(self.languages.clone(), &self.default_language)
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            default_language: LanguageCode::new("en"),
            locales_dir: "locales".to_string(),
            key_separator: ".".to_string(),
        }
    }
}

/// 既定の対応言語（サイトが出荷時に提供する 7 言語）
fn default_languages() -> Vec<Language> {
    [
        ("en", "English", "English", "🇬🇧"),
        ("es", "Spanish", "Español", "🇪🇸"),
        ("ru", "Russian", "Русский", "🇷🇺"),
        ("zh", "Chinese", "中文", "🇨🇳"),
        ("pt", "Portuguese", "Português", "🇵🇹"),
        ("de", "German", "Deutsch", "🇩🇪"),
        ("fr", "French", "Français", "🇫🇷"),
    ]
    .into_iter()
    .map(|(code, name, native_name, flag)| Language {
        code: LanguageCode::new(code),
        name: name.to_string(),
        native_name: native_name.to_string(),
        flag: Some(flag.to_string()),
    })
    .collect()
}
