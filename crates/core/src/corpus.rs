//! The loaded corpus and its load statistics

use std::fmt;

/// Why a line was left out of the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Separator split did not give exactly a title and a content
    Malformed,
    /// Content longer than the length bound
    TooLong,
    /// Content contains a disallowed substring
    Disallowed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Malformed => "malformed",
            Self::TooLong => "too long",
            Self::Disallowed => "disallowed substring",
        };
        f.write_str(s)
    }
}

/// Per-outcome line counts for one load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_lines: usize,
    pub accepted: usize,
    pub malformed: usize,
    pub too_long: usize,
    pub disallowed: usize,
    /// Bytes read from the source before newline normalization
    pub bytes_processed: u64,
}

impl LoadStats {
    pub(crate) fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Malformed => self.malformed += 1,
            SkipReason::TooLong => self.too_long += 1,
            SkipReason::Disallowed => self.disallowed += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.malformed + self.too_long + self.disallowed
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.total_lines > 0 {
            (self.accepted as f64 / self.total_lines as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Ordered poem contents, in source-file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    poems: Vec<String>,
    stats: LoadStats,
}

impl Corpus {
    pub(crate) fn new(poems: Vec<String>, stats: LoadStats) -> Self {
        Self { poems, stats }
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.poems.iter()
    }

    /// First `n` poems, or all of them when the corpus is shorter
    pub fn head(&self, n: usize) -> &[String] {
        &self.poems[..n.min(self.poems.len())]
    }

    pub fn poems(&self) -> &[String] {
        &self.poems
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut LoadStats {
        &mut self.stats
    }

    pub fn into_poems(self) -> Vec<String> {
        self.poems
    }
}

impl IntoIterator for Corpus {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.poems.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.poems.iter()
    }
}
