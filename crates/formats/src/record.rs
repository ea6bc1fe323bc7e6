//! Title/content record split from a corpus line

use crate::SourceLine;
use regex::Regex;
use std::sync::OnceLock;

/// Separator glyphs accepted between title and content
pub const SEPARATORS: [char; 2] = [':', '：'];

static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| {
        Regex::new(r"[:：]").expect("Failed to compile separator regex")
    })
}

/// A single poem record: `title<sep>content`, borrowed from its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub title: &'a str,
    /// Content exactly as split, trailing `\n` included when present
    pub content: &'a str,
    /// Source line number
    pub source_line: usize,
}

impl<'a> Record<'a> {
    /// Split a line into title and content.
    ///
    /// Returns `None` unless the split yields exactly two fields, so a
    /// line with no separator or with several separators is rejected.
    pub fn parse(line: &'a SourceLine) -> Option<Self> {
        let mut fields = get_separator_regex().split(&line.text);
        let title = fields.next()?;
        let content = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            title,
            content,
            source_line: line.number,
        })
    }

    /// Content with the line terminator removed
    pub fn cleaned_content(&self) -> &'a str {
        self.content.strip_suffix('\n').unwrap_or(self.content)
    }
}
