//! 言語セレクターウィジェット
//!
//! 対応言語の一覧を表示し、選択を言語状態への変更要求に変換する
//! 入力アダプター。自身が持つのはドロップダウンの開閉状態だけで、
//! 現在の言語は保持しない（表示は Synchronizer が更新する）。

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::state::LanguageState;
use crate::types::{
    LanguageCode,
    SupportedLanguages,
};

/// ドロップダウンの開閉状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// 閉じている（初期状態）
    #[default]
    Closed,
    /// 開いている
    Open,
}

/// セレクターに表示する一項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    /// 言語コード
    pub code: LanguageCode,
    /// 表示名（その言語自身での名前）
    pub label: String,
    /// 絵文字の国旗
    pub flag: Option<String>,
}

/// 言語セレクターウィジェット
#[derive(Debug)]
pub struct LanguageSelector {
    /// 表示する言語の一覧（設定された表示順のまま）
    entries: Vec<SelectorEntry>,
    /// ドロップダウンの開閉状態
    state: SelectorState,
    /// 言語変更要求の送り先
    language_state: Arc<Mutex<LanguageState>>,
}

impl LanguageSelector {
    /// 新しいセレクターを作成する（初期状態は閉）
    #[must_use]
    pub fn new(
        languages: &SupportedLanguages,
        language_state: Arc<Mutex<LanguageState>>,
    ) -> Self {
        let entries = languages
            .iter()
            .map(|language| SelectorEntry {
                code: language.code.clone(),
                label: language.native_name.clone(),
                flag: language.flag.clone(),
            })
            .collect();
        Self { entries, state: SelectorState::Closed, language_state }
    }

    /// 表示項目
    #[must_use]
    pub fn entries(&self) -> &[SelectorEntry] {
        &self.entries
    }

    /// 現在の開閉状態
    #[must_use]
    pub const fn state(&self) -> SelectorState {
        self.state
    }

    /// ドロップダウンが開いているか
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SelectorState::Open)
    }

    /// トリガー操作（閉→開、開→閉）
    pub fn toggle(&mut self) {
        self.state = match self.state {
            SelectorState::Closed => SelectorState::Open,
            SelectorState::Open => SelectorState::Closed,
        };
    }

    /// ウィジェット外の操作（開いていれば閉じる）
    pub fn interact_outside(&mut self) {
        self.state = SelectorState::Closed;
    }

    /// 項目を選択する
    ///
    /// 言語状態へ変更を依頼し、完了後にドロップダウンを閉じる。
    /// 未対応コードの扱いは言語状態側の置き換えに任せる。
    pub async fn select(&mut self, code: &str) {
        self.language_state.lock().await.set_language(code).await;
        self.state = SelectorState::Closed;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::TranslationStore;
    use crate::prefs::PreferenceStore;
    use crate::types::Language;

    /// テスト用の対応言語集合（en / es）
    fn languages() -> Arc<SupportedLanguages> {
        let entries = vec![
            Language {
                code: LanguageCode::new("en"),
                name: "English".to_string(),
                native_name: "English".to_string(),
                flag: Some("🇬🇧".to_string()),
            },
            Language {
                code: LanguageCode::new("es"),
                name: "Spanish".to_string(),
                native_name: "Español".to_string(),
                flag: Some("🇪🇸".to_string()),
            },
        ];
        Arc::new(SupportedLanguages::new(entries, &LanguageCode::new("en")).unwrap())
    }

    /// テスト用のセレクター一式を組み立てる
    fn build_selector(dir: &TempDir) -> (LanguageSelector, Arc<Mutex<LanguageState>>) {
        let locales = dir.path().join("locales");
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("en.json"), r#"{"hero": {"cta": "Book Now"}}"#).unwrap();
        fs::write(locales.join("es.json"), r#"{"hero": {"cta": "Reservar"}}"#).unwrap();

        let languages = languages();
        let store = Arc::new(TranslationStore::new(locales, ".", LanguageCode::new("en")));
        let prefs = PreferenceStore::for_site_root(dir.path());
        let state = Arc::new(Mutex::new(LanguageState::new(languages.clone(), store, prefs)));
        (LanguageSelector::new(&languages, Arc::clone(&state)), state)
    }

    #[googletest::test]
    fn selector_starts_closed_with_all_entries() {
        let dir = TempDir::new().unwrap();
        let (selector, _) = build_selector(&dir);

        expect_that!(selector.state(), eq(SelectorState::Closed));
        expect_that!(selector.entries(), len(eq(2)));
        expect_that!(
            selector.entries().first().map(|entry| entry.label.as_str()),
            some(eq("English"))
        );
    }

    #[googletest::test]
    fn toggle_opens_and_closes() {
        let dir = TempDir::new().unwrap();
        let (mut selector, _) = build_selector(&dir);

        selector.toggle();
        expect_that!(selector.is_open(), eq(true));

        selector.toggle();
        expect_that!(selector.is_open(), eq(false));
    }

    #[googletest::test]
    fn outside_interaction_closes_an_open_dropdown() {
        let dir = TempDir::new().unwrap();
        let (mut selector, _) = build_selector(&dir);

        selector.toggle();
        selector.interact_outside();

        expect_that!(selector.is_open(), eq(false));
    }

    #[googletest::test]
    fn outside_interaction_keeps_a_closed_dropdown_closed() {
        let dir = TempDir::new().unwrap();
        let (mut selector, _) = build_selector(&dir);

        selector.interact_outside();

        expect_that!(selector.is_open(), eq(false));
    }

    #[tokio::test]
    async fn select_changes_language_and_closes() {
        let dir = TempDir::new().unwrap();
        let (mut selector, state) = build_selector(&dir);
        selector.toggle();

        selector.select("es").await;

        assert_eq!(state.lock().await.active().as_str(), "es");
        assert!(!selector.is_open());
    }
}
