//! 翻訳リソースの読み込み関数

use std::path::Path;

use serde_json::Value;

use super::CatalogError;
use super::table::TranslationTable;
use crate::types::LanguageCode;

/// 言語コードに対応する翻訳リソースを読み込む
///
/// `<locales_dir>/<code>.json` を読み込み、フラットなテーブルへ変換する
///
/// # Arguments
/// * `locales_dir` - 翻訳リソースを置くディレクトリ
/// * `language` - 読み込む言語
/// * `separator` - フラット化に使うキー区切り文字
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) async fn load_table(
    locales_dir: &Path,
    language: &LanguageCode,
    separator: &str,
) -> Result<TranslationTable, CatalogError> {
    let resource_path = locales_dir.join(format!("{}.json", language.as_str()));
    tracing::debug!("Loading translation resource from: {:?}", resource_path);

    let content = tokio::fs::read_to_string(&resource_path).await?;
    let json: Value = serde_json::from_str(&content)?;

    Ok(TranslationTable::from_json(&json, separator))
}
