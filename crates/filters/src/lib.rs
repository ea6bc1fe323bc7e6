//! Content filters for poem corpus cleaning
//!
//! This crate provides the checks that decide whether a poem's
//! content is kept: a length bound and a disallowed-substring scan.

pub mod disallowed;
pub mod error;
pub mod length_filter;

pub use disallowed::{DisallowedFilter, DEFAULT_DISALLOWED_WORDS};
pub use error::{Error, Result};
pub use length_filter::{passes_length_filter, LengthFilterConfig};
