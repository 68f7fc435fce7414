//! Initial language resolution.
//!
//! Priority order: persisted preference, then the system locale (full tag
//! first, base subtag second), then the default language.

use crate::prefs::PreferenceStore;
use crate::types::{
    LanguageCode,
    SupportedLanguages,
};

/// Resolves the language to activate at startup.
///
/// Read-only probing; nothing is written and no table is loaded here.
#[must_use]
pub fn resolve_initial_language(
    prefs: &PreferenceStore,
    languages: &SupportedLanguages,
    system_locale: Option<&str>,
) -> LanguageCode {
    if let Some(saved) = prefs.load()
        && languages.contains(saved.as_str())
    {
        tracing::debug!("Resolved initial language from saved preference: {}", saved);
        return saved;
    }

    if let Some(tag) = system_locale
        && let Some(code) = match_locale(languages, tag)
    {
        tracing::debug!("Resolved initial language from system locale '{}': {}", tag, code);
        return code;
    }

    languages.default_language().code.clone()
}

/// Matches a raw locale tag against the supported set.
///
/// Tries the normalized full tag first ("pt-br"), then its base
/// subtag ("pt"). Returns `None` when neither is supported.
fn match_locale(languages: &SupportedLanguages, tag: &str) -> Option<LanguageCode> {
    let full = LanguageCode::from_locale_tag(tag);
    if languages.contains(full.as_str()) {
        return Some(full);
    }
    let base = full.base();
    if languages.contains(base.as_str()) {
        return Some(base);
    }
    None
}

/// Probes the environment for the system locale.
///
/// Uses `sys-locale` first and falls back to `LC_ALL`/`LANG` for
/// minimal environments.
#[must_use]
pub fn detect_system_locale() -> Option<String> {
    sys_locale::get_locale()
        .or_else(|| std::env::var("LC_ALL").ok())
        .or_else(|| std::env::var("LANG").ok())
        .filter(|tag| !tag.trim().is_empty())
}
