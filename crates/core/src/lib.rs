//! Poem corpus loading
//!
//! This crate reads a `title:content` corpus, drops malformed,
//! over-long and bracket-annotated poems, and returns the remaining
//! contents in file order.

pub mod config;
pub mod corpus;
pub mod error;
pub mod loader;

pub use config::LoaderConfig;
pub use corpus::{Corpus, LoadStats, SkipReason};
pub use error::{Error, Result};
pub use loader::{load_corpus, CorpusLoader};
