//! ビューの同期
//!
//! ページの翻訳対象面をドキュメントモデルとして保持し、
//! 言語変更のたびにテーブルの内容を反映する。
mod document;
mod sync;

pub use document::{
    Document,
    Element,
    SelectorOption,
};
pub use sync::{
    DocumentSynchronizer,
    apply,
};
