//! Error types and handling for HMS core

use thiserror::Error;

/// Result type alias for HMS core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for HMS core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Page routing errors
    #[error("Router error: {0}")]
    Router(#[from] crate::router::RouterError),

    /// Malformed sample tables
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Theme colour parsing errors
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

}

/// Configuration-specific errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Table construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Table has no columns")]
    NoColumns,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Theme errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid hex colour: {0}")]
    InvalidHex(String),
}
