//! Error types for the corpus loader

use thiserror::Error;

/// Corpus loader errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Read error: {0}")]
    Format(#[from] versecorpus_formats::Error),

    #[error("Filter error: {0}")]
    Filter(#[from] versecorpus_filters::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },
}

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, Error>;
