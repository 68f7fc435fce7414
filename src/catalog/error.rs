use thiserror::Error;

/// Defines errors that may occur while loading translation resources
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the resource file cannot be read
    #[error("Failed to read translation resource: {0}")]
    IoError(#[from] std::io::Error),
    /// Error when the resource is not valid JSON
    #[error("Failed to parse translation resource: {0}")]
    ParseError(#[from] serde_json::Error),
}
