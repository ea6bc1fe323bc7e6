//! Corpus loader
//!
//! Reads a corpus file line by line and keeps the content of every
//! record that survives the separator, length and disallowed-substring
//! checks. Rejected lines are expected noise: they are counted in
//! [`LoadStats`] and never turn into errors.

use crate::config::LoaderConfig;
use crate::corpus::{Corpus, LoadStats, SkipReason};
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use versecorpus_filters::{passes_length_filter, DisallowedFilter, LengthFilterConfig};
use versecorpus_formats::{LineReader, Record, SourceLine};

/// Builds a [`Corpus`] from newline-delimited `title:content` records
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    config: LoaderConfig,
    length: LengthFilterConfig,
    disallowed: DisallowedFilter,
}

impl CorpusLoader {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        let disallowed = config.disallowed_filter()?;
        let length = LengthFilterConfig::for_sequence_len(config.max_len);

        Ok(Self {
            config,
            length,
            disallowed,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the corpus from the configured path.
    ///
    /// Fails if the file is missing, unreadable or not valid UTF-8.
    pub fn load(&self) -> Result<Corpus> {
        self.load_from_line_reader(LineReader::open(&self.config.path)?)
    }

    /// Load the corpus from any byte source
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Corpus> {
        self.load_from_line_reader(LineReader::new(reader))
    }

    fn load_from_line_reader<R: Read>(&self, mut reader: LineReader<R>) -> Result<Corpus> {
        let mut corpus = self.load_lines(reader.by_ref())?;
        corpus.stats_mut().bytes_processed = reader.bytes_processed();
        Ok(corpus)
    }

    /// Load the corpus from already-read lines, stopping at the first error.
    ///
    /// `bytes_processed` is left at zero since the lines carry no byte
    /// counts of their own.
    pub fn load_lines<I, E>(&self, lines: I) -> Result<Corpus>
    where
        I: IntoIterator<Item = std::result::Result<SourceLine, E>>,
        Error: From<E>,
    {
        let mut poems = Vec::new();
        let mut stats = LoadStats::default();

        for line in lines {
            let line = line?;
            stats.total_lines += 1;

            let number = line.number;
            match self.check(&line) {
                Ok(content) => {
                    stats.accepted += 1;
                    poems.push(content);
                }
                Err(reason) => {
                    if self.config.report_skips {
                        warn!("Skipping line {}: {}", number, reason);
                    }
                    stats.record_skip(reason);
                }
            }
        }

        debug!(
            "Loaded {} poems from {} lines ({} malformed, {} too long, {} disallowed)",
            stats.accepted, stats.total_lines, stats.malformed, stats.too_long, stats.disallowed
        );

        Ok(Corpus::new(poems, stats))
    }

    /// Run one line through every check, returning its cleaned content.
    ///
    /// Length and substring checks see the content as split, line
    /// terminator included; only accepted content is stripped.
    pub fn check(&self, line: &SourceLine) -> std::result::Result<String, SkipReason> {
        let record = Record::parse(line).ok_or(SkipReason::Malformed)?;

        if !passes_length_filter(&record.content, &self.length) {
            return Err(SkipReason::TooLong);
        }

        if !self.disallowed.is_clean(&record.content) {
            return Err(SkipReason::Disallowed);
        }

        Ok(record.cleaned_content().to_string())
    }
}

/// Load `path` with a `max_len` bound and the default disallowed words
pub fn load_corpus<P: AsRef<Path>>(path: P, max_len: usize) -> Result<Corpus> {
    let config = LoaderConfig {
        max_len,
        ..LoaderConfig::with_path(path.as_ref())
    };
    CorpusLoader::new(config)?.load()
}
