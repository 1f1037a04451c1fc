//! Error types for chatmark

use thiserror::Error;

/// Main error type for chatmark operations.
///
/// Parsing never fails; these variants only come from the I/O edges
/// (configuration files, output writers, the clipboard).
#[derive(Error, Debug)]
pub enum ChatmarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for chatmark operations
pub type Result<T> = std::result::Result<T, ChatmarkError>;
