//! Error types for FlatStore
//!
//! Provides a unified error type for store and calculator operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FlatError
pub type Result<T> = std::result::Result<T, FlatError>;

/// Unified error type for FlatStore operations
#[derive(Debug, Error)]
pub enum FlatError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file not found: {}", .0.display())]
    NotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Invalid file format (magic: 0x{found:08X})")]
    InvalidMagic { found: u32 },

    #[error("Truncated data: expected {expected} bytes, got {found}")]
    Truncated { expected: usize, found: usize },

    // -------------------------------------------------------------------------
    // Calculator Errors
    // -------------------------------------------------------------------------
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Parse error: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FlatError {
    fn from(err: serde_json::Error) -> Self {
        FlatError::Serialization(err.to_string())
    }
}
