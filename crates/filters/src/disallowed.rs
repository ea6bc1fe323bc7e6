//! Disallowed-substring filtering
//!
//! Poems whose content carries editorial marks (brackets around lacunae,
//! variant readings, placeholder underscores) are dropped outright.

use crate::{Error, Result};

/// Substrings that disqualify a poem
pub const DEFAULT_DISALLOWED_WORDS: [&str; 11] = [
    "（", "）", "(", ")", "__", "《", "》", "【", "】", "[", "]",
];

/// Rejects text containing any of a fixed set of substrings
#[derive(Debug, Clone)]
pub struct DisallowedFilter {
    words: Vec<String>,
}

impl DisallowedFilter {
    /// Create a filter from a custom word list.
    ///
    /// Empty words are rejected since they would match every text.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.iter().any(|w| w.is_empty()) {
            return Err(Error::InvalidConfig(
                "disallowed words must not be empty".to_string(),
            ));
        }
        Ok(Self { words })
    }

    /// The configured words, in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Return the first configured word found in `text`
    pub fn find_disallowed(&self, text: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|word| text.contains(word.as_str()))
            .map(String::as_str)
    }

    /// True when `text` contains none of the words
    pub fn is_clean(&self, text: &str) -> bool {
        self.find_disallowed(text).is_none()
    }
}

impl Default for DisallowedFilter {
    fn default() -> Self {
        Self {
            words: DEFAULT_DISALLOWED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
