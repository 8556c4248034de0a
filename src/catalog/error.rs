//! Error types for catalog and config data loading.

use thiserror::Error;

/// Errors that can occur when parsing catalog or config data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// RON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// An item's color string is not of the form `#RRGGBB`.
    #[error("Invalid color '{value}' for item '{item}'")]
    InvalidColor { item: String, value: String },

    /// Two catalog entries share a name.
    #[error("Duplicate item name '{0}' in catalog")]
    DuplicateName(String),

    /// The catalog contains no items at all.
    #[error("Catalog contains no items")]
    Empty,
}
