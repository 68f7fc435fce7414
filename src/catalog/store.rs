//! 翻訳テーブルのキャッシュと読み込みフォールバック

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use tokio::sync::Mutex;

use super::loader;
use super::table::TranslationTable;
use crate::config::I18nSettings;
use crate::types::LanguageCode;

/// 言語ごとの翻訳テーブルを貸し出すストア
///
/// テーブルは要求時に読み込み、セッションの間キャッシュし続ける。
/// 読み込みに失敗した要求はキャッシュしない（次回の要求で再試行する）。
pub struct TranslationStore {
    /// 翻訳リソースを置くディレクトリ
    locales_dir: PathBuf,
    /// フラット化に使うキー区切り文字
    key_separator: String,
    /// 既定言語（読み込み失敗時のフォールバック先）
    default_language: LanguageCode,
    /// 読み込み済みテーブル（言語コード → テーブル）
    cache: Mutex<HashMap<LanguageCode, Arc<TranslationTable>>>,
}

impl TranslationStore {
    /// 新しいストアを作成する
    #[must_use]
    pub fn new(
        locales_dir: impl Into<PathBuf>,
        key_separator: impl Into<String>,
        default_language: LanguageCode,
    ) -> Self {
        Self {
            locales_dir: locales_dir.into(),
            key_separator: key_separator.into(),
            default_language,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// 設定からストアを構築する（`localesDir` はサイトルートからの相対パス）
    #[must_use]
    pub fn from_settings(site_root: &Path, settings: &I18nSettings) -> Self {
        Self::new(
            site_root.join(&settings.locales_dir),
            settings.key_separator.clone(),
            settings.default_language.clone(),
        )
    }

    /// 要求された言語のテーブルを返す
    ///
    /// 戻り値は実際に読み込めた言語とそのテーブルの組。
    /// 読み込みに失敗した場合は既定言語で一度だけ再試行し、
    /// それも失敗した場合は空のテーブルを返す。呼び出し側へは
    /// どの経路でもエラーを返さない。
    pub async fn table(&self, language: &LanguageCode) -> (LanguageCode, Arc<TranslationTable>) {
        if let Some(table) = self.load_or_cached(language).await {
            return (language.clone(), table);
        }

        if *language != self.default_language {
            tracing::warn!(
                "Retrying with default language '{}' after failing to load '{}'",
                self.default_language,
                language
            );
            if let Some(table) = self.load_or_cached(&self.default_language).await {
                return (self.default_language.clone(), table);
            }
        }

        tracing::warn!(
            "Default language '{}' could not be loaded; serving an empty table",
            self.default_language
        );
        (self.default_language.clone(), Arc::new(TranslationTable::empty()))
    }

    /// キャッシュ済みならそれを、なければ読み込んでキャッシュする
    async fn load_or_cached(&self, language: &LanguageCode) -> Option<Arc<TranslationTable>> {
        if let Some(table) = self.cache.lock().await.get(language) {
            return Some(Arc::clone(table));
        }

        match loader::load_table(&self.locales_dir, language, &self.key_separator).await {
            Ok(table) => {
                let table = Arc::new(table);
                self.cache.lock().await.insert(language.clone(), Arc::clone(&table));
                Some(table)
            }
            Err(err) => {
                tracing::warn!("Failed to load translation resource for '{}': {}", language, err);
                None
            }
        }
    }
}

impl std::fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationStore")
            .field("locales_dir", &self.locales_dir)
            .field("key_separator", &self.key_separator)
            .field("default_language", &self.default_language)
            .field("cache", &"<HashMap<LanguageCode, Arc<TranslationTable>>>")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// テスト用の locales ディレクトリを作る
    fn locales_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).unwrap();
        }
        temp_dir
    }

    /// テスト用のストアを作る（既定言語は "en"）
    fn store(dir: &TempDir) -> TranslationStore {
        TranslationStore::new(dir.path(), ".", LanguageCode::new("en"))
    }

    #[tokio::test]
    async fn table_returns_requested_language() {
        let dir = locales_dir(&[("es.json", r#"{"hero": {"cta": "Reservar Ahora"}}"#)]);
        let store = store(&dir);

        let (loaded, table) = store.table(&LanguageCode::new("es")).await;

        assert_that!(loaded.as_str(), eq("es"));
        assert_that!(table.get("hero.cta"), some(eq("Reservar Ahora")));
    }

    #[tokio::test]
    async fn table_is_cached_after_first_load() {
        let dir = locales_dir(&[("es.json", r#"{"hero": {"cta": "Reservar"}}"#)]);
        let store = store(&dir);

        let (_, first) = store.table(&LanguageCode::new("es")).await;
        // リソースを消しても 2 回目はキャッシュから返る
        fs::remove_file(dir.path().join("es.json")).unwrap();
        let (loaded, second) = store.table(&LanguageCode::new("es")).await;

        assert_that!(loaded.as_str(), eq("es"));
        assert_that!(second.get("hero.cta"), eq(first.get("hero.cta")));
    }

    #[tokio::test]
    async fn table_falls_back_to_default_language() {
        let dir = locales_dir(&[("en.json", r#"{"hero": {"cta": "Book Now"}}"#)]);
        let store = store(&dir);

        let (loaded, table) = store.table(&LanguageCode::new("es")).await;

        assert_that!(loaded.as_str(), eq("en"));
        assert_that!(table.get("hero.cta"), some(eq("Book Now")));
    }

    #[tokio::test]
    async fn table_serves_empty_table_when_default_also_fails() {
        let dir = locales_dir(&[]);
        let store = store(&dir);

        let (loaded, table) = store.table(&LanguageCode::new("es")).await;

        assert_that!(loaded.as_str(), eq("en"));
        assert_that!(table.is_empty(), eq(true));
    }

    #[tokio::test]
    async fn failed_load_is_retried_on_next_request() {
        let dir = locales_dir(&[]);
        let store = store(&dir);

        // 最初の要求は失敗して空テーブルに落ちる
        let (_, first) = store.table(&LanguageCode::new("es")).await;
        assert_that!(first.is_empty(), eq(true));

        // リソースが現れれば次の要求で読み込まれる（失敗はキャッシュされない）
        fs::write(dir.path().join("es.json"), r#"{"hero": {"cta": "Reservar"}}"#).unwrap();
        let (loaded, second) = store.table(&LanguageCode::new("es")).await;

        assert_that!(loaded.as_str(), eq("es"));
        assert_that!(second.get("hero.cta"), some(eq("Reservar")));
    }

    /// 同期コンテキストからの利用（`tokio_test::block_on`）
    #[rstest]
    fn table_can_be_driven_synchronously() {
        let dir = locales_dir(&[("en.json", r#"{"hero": {"cta": "Book Now"}}"#)]);
        let store = store(&dir);

        let (loaded, table) = tokio_test::block_on(store.table(&LanguageCode::new("en")));

        assert_that!(loaded.as_str(), eq("en"));
        assert_that!(table.get("hero.cta"), some(eq("Book Now")));
    }
}
