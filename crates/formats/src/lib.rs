//! Corpus file readers
//!
//! This crate reads newline-delimited poem corpora, plain or
//! gzip-compressed, and splits each line into a title and content.

pub mod error;
pub mod lines;
pub mod record;

pub use error::{Error, Result};
pub use lines::{LineReader, LineReaderConfig, SourceLine};
pub use record::Record;
