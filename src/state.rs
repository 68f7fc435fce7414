//! 言語状態の管理
//!
//! 「現在の言語」の唯一の所有者。変更要求の検証、テーブルの取得、
//! 永続化、購読者への通知までを一回の `set_language` で完結させる。
//!
//! # 順序保証
//!
//! `set_language` はテーブルの取得が完了してから状態を更新し、
//! すべての購読者への通知を終えてから戻る。購読者が古い状態を
//! 観測することはない。

use std::sync::Arc;

use crate::catalog::{
    TranslationStore,
    TranslationTable,
};
use crate::prefs::PreferenceStore;
use crate::types::{
    Language,
    LanguageCode,
    SupportedLanguages,
};

/// 言語変更の通知内容
///
/// 新しい言語のテーブルを同梱するので、購読者が通知の処理中に
/// ストアへ問い合わせ直す必要はない。
#[derive(Debug, Clone, Copy)]
pub struct LanguageChange<'a> {
    /// 新しい言語コード
    pub language: &'a LanguageCode,
    /// 新しい言語の翻訳テーブル
    pub table: &'a TranslationTable,
}

/// 言語変更の購読者
///
/// `set_language` が戻る前に、登録順で同期的に呼び出される。
pub trait LanguageListener: Send + Sync {
    /// 言語が変更されたときに呼び出される
    fn language_changed(&self, change: &LanguageChange<'_>);
}

/// プロセス全体の「現在の言語」を管理する
pub struct LanguageState {
    /// 対応言語の集合
    languages: Arc<SupportedLanguages>,
    /// 翻訳テーブルのストア
    store: Arc<TranslationStore>,
    /// 言語設定の永続化先
    prefs: PreferenceStore,
    /// 現在の言語
    active: LanguageCode,
    /// 購読者のリスト
    listeners: Vec<Arc<dyn LanguageListener>>,
}

impl LanguageState {
    /// 新しい言語状態を作成する
    ///
    /// 初期値は既定言語。最初の描画は `set_language` の呼び出しで行う。
    #[must_use]
    pub fn new(
        languages: Arc<SupportedLanguages>,
        store: Arc<TranslationStore>,
        prefs: PreferenceStore,
    ) -> Self {
        let active = languages.default_language().code.clone();
        Self { languages, store, prefs, active, listeners: Vec::new() }
    }

    /// 購読者を登録する
    pub fn subscribe(&mut self, listener: Arc<dyn LanguageListener>) {
        self.listeners.push(listener);
    }

    /// 現在の言語コード
    #[must_use]
    pub const fn active(&self) -> &LanguageCode {
        &self.active
    }

    /// 現在の言語のメタデータ
    ///
    /// 表示名の導出はキャッシュせず、呼び出しごとにここで行う。
    #[must_use]
    pub fn active_language(&self) -> &Language {
        self.languages
            .get(self.active.as_str())
            .unwrap_or_else(|| self.languages.default_language())
    }

    /// 言語を変更する
    ///
    /// 未対応のコードは警告を出して既定言語に置き換える。テーブルの
    /// 取得完了後に現在の言語を更新・保存し、すべての購読者へ通知して
    /// から戻る。同じ言語への変更も省略せず同じ経路を通る。
    pub async fn set_language(&mut self, requested: &str) {
        let code = self.languages.get(requested).map_or_else(
            || {
                tracing::warn!(
                    "Language '{}' is not supported; falling back to default",
                    requested
                );
                self.languages.default_language().code.clone()
            },
            |language| language.code.clone(),
        );

        let (loaded, table) = self.store.table(&code).await;

        self.active = loaded;
        self.prefs.save(&self.active);

        let change = LanguageChange { language: &self.active, table: &table };
        for listener in &self.listeners {
            listener.language_changed(&change);
        }

        tracing::debug!("Language changed to: {}", self.active);
    }

    /// 現在の言語のまま通知と再描画をやり直す
    pub async fn reload(&mut self) {
        let active = self.active.clone();
        self.set_language(active.as_str()).await;
    }
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("languages", &self.languages)
            .field("active", &self.active)
            .field("listeners", &format_args!("<{} listeners>", self.listeners.len()))
            .finish_non_exhaustive()
    }
}
