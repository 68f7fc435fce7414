//! サイト設定（対応言語・既定言語・翻訳リソースの場所）
mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    I18nSettings,
    ValidationError,
};
