//! Entry point for the interactive language-selection demo.
//!
//! Renders the translatable surface of the landing page to stdout and
//! switches language for every code read from stdin. Logs go to a file so
//! they never interleave with the rendered view.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::{
    Arc,
    Mutex,
};

use taxi_site_i18n::LanguageState;
use taxi_site_i18n::catalog::TranslationStore;
use taxi_site_i18n::config::ConfigManager;
use taxi_site_i18n::prefs::PreferenceStore;
use taxi_site_i18n::resolver;
use taxi_site_i18n::selector::LanguageSelector;
use taxi_site_i18n::types::SupportedLanguages;
use taxi_site_i18n::view::{
    Document,
    DocumentSynchronizer,
    Element,
};
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() {
    let file_appender = tracing_appender::rolling::never(".", "taxi-site-i18n.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let site_root = PathBuf::from(".");
    let mut config = ConfigManager::new();
    if let Err(err) = config.load_settings(Some(site_root.clone())) {
        tracing::error!("Could not load site configuration: {}", err);
        return;
    }
    let settings = config.get_settings();
    let Some(languages) = settings.supported_languages() else {
        tracing::error!("Site configuration has no usable language set");
        return;
    };
    let languages = Arc::new(languages);

    let store = Arc::new(TranslationStore::from_settings(&site_root, settings));
    let prefs = PreferenceStore::for_site_root(&site_root);
    let initial = resolver::resolve_initial_language(
        &prefs,
        &languages,
        resolver::detect_system_locale().as_deref(),
    );

    let document = Arc::new(Mutex::new(landing_document(&languages)));
    let mut state = LanguageState::new(Arc::clone(&languages), store, prefs);
    state.subscribe(Arc::new(DocumentSynchronizer::new(
        Arc::clone(&document),
        Arc::clone(&languages),
    )));
    state.set_language(initial.as_str()).await;

    let state = Arc::new(tokio::sync::Mutex::new(state));
    let mut selector = LanguageSelector::new(&languages, Arc::clone(&state));

    render(&document);
    println!("-- type a language code to switch --");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        selector.toggle();
        selector.select(code).await;
        render(&document);
    }
}

/// The translatable surface of the landing page.
fn landing_document(languages: &SupportedLanguages) -> Document {
    let mut document = Document::new(languages);
    document.push(Element::unbound("brand", "SOYTUTAXI"));
    document.push(Element::text_bound("nav-welcome", "nav.welcome"));
    document.push(Element::text_bound("hero-subtitle", "hero.subtitle"));
    document.push(Element::text_bound("hero-title", "hero.title"));
    document.push(Element::text_bound("hero-tagline", "hero.tagline"));
    document.push(Element::text_bound("hero-cta", "hero.cta"));
    document.push(Element::text_bound("services-title", "services.title"));
    document.push(Element::text_bound("pricing-title", "pricing.title"));
    document.push(Element::text_bound("contact-title", "contact.title"));
    document.push(Element::placeholder_bound("contact-name", "contact.name"));
    document.push(Element::placeholder_bound("contact-email", "contact.email"));
    document.push(Element::placeholder_bound("contact-message", "contact.message"));
    document
}

/// Prints the current document state.
fn render(document: &Arc<Mutex<Document>>) {
    let Ok(document) = document.lock() else {
        tracing::warn!("Skipping render, document lock poisoned");
        return;
    };
    println!();
    println!("lang={} [{}]", document.lang, document.selector_label);
    for element in &document.elements {
        match &element.placeholder {
            Some(placeholder) => println!("  {:<16} (placeholder) {}", element.name, placeholder),
            None => println!("  {:<16} {}", element.name, element.text),
        }
    }
    let options: Vec<String> = document
        .selector_options
        .iter()
        .map(|option| {
            if option.active {
                format!("[{}]", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect();
    println!("  selector: {}", options.join(" "));
}
