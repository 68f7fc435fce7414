//! 言語設定の永続化
//!
//! ブラウザーの localStorage に相当する、サイトルート配下の
//! JSON ファイルへの読み書き。永続化はベストエフォートであり、
//! 失敗してもセッションの動作には影響しない。

use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::LanguageCode;

/// 保存ファイル名（アプリケーション名前空間付き）
const PREFERENCE_FILE: &str = ".taxi-i18n-language.json";

/// 保存される内容
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreference {
    /// 選択された言語コード
    language: LanguageCode,
}

/// 永続化で発生し得るエラー（警告ログにのみ使われる）
#[derive(Error, Debug)]
enum PreferenceError {
    /// ファイル読み書きエラー
    #[error("Failed to access preference file: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON パースエラー
    #[error("Failed to parse preference file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// 言語設定の読み書きを行う
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    /// 保存ファイルのパス
    path: PathBuf,
}

impl PreferenceStore {
    /// 保存ファイルのパスを直接指定してストアを作成
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// サイトルート直下の保存ファイルを使うストアを作成
    #[must_use]
    pub fn for_site_root(site_root: &Path) -> Self {
        Self::new(site_root.join(PREFERENCE_FILE))
    }

    /// 保存された言語コードを読み込む
    ///
    /// ファイルが無い・読めない・壊れている場合はいずれも `None`
    /// （警告ログのみ、エラーにはしない）
    #[must_use]
    pub fn load(&self) -> Option<LanguageCode> {
        if !self.path.exists() {
            return None;
        }
        match self.read() {
            Ok(stored) => Some(stored.language),
            Err(err) => {
                tracing::warn!("Failed to read language preference: {}", err);
                None
            }
        }
    }

    /// 言語コードを保存する
    ///
    /// 書き込み失敗は警告ログのみで握りつぶす（セッション内の
    /// 言語状態はメモリー上の値で維持される）
    pub fn save(&self, language: &LanguageCode) {
        if let Err(err) = self.write(language) {
            tracing::warn!("Failed to save language preference: {}", err);
        }
    }

    /// 保存ファイルを読み込む
    fn read(&self) -> Result<StoredPreference, PreferenceError> {
        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredPreference = serde_json::from_str(&content)?;
        Ok(stored)
    }

    /// 保存ファイルへ書き込む
    fn write(&self, language: &LanguageCode) -> Result<(), PreferenceError> {
        let stored = StoredPreference { language: language.clone() };
        let content = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
