//! Typed errors for the table view and theme loading.

/// Errors raised while interpreting table interaction payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column '{0}' cannot be filtered")]
    NotFilterable(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// Errors raised while reading a theme token file.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Invalid color for token '{token}': {value}")]
    InvalidColor { token: String, value: String },

    #[error("Malformed token file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read token file: {0}")]
    Io(#[from] std::io::Error),
}
