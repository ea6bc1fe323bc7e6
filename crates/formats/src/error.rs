//! Error types for corpus readers

use thiserror::Error;

/// Reader errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file: {0}")]
    InvalidFile(String),
}

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, Error>;
