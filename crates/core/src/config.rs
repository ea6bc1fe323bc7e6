//! Loader configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use versecorpus_filters::length_filter::RESERVED_MARKERS;
use versecorpus_filters::{DisallowedFilter, DEFAULT_DISALLOWED_WORDS};

/// Corpus file read when no other path is configured
pub const DEFAULT_DATA_PATH: &str = "shi.txt";

/// Model sequence length the corpus is prepared for
pub const DEFAULT_MAX_LEN: usize = 64;

/// Settings for a corpus load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Corpus file, plain text or `.gz`
    pub path: PathBuf,
    /// Sequence length; content may use at most `max_len - 2` characters
    pub max_len: usize,
    /// Substrings that disqualify a poem
    pub disallowed_words: Vec<String>,
    /// Emit a warning for every skipped line
    pub report_skips: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            max_len: DEFAULT_MAX_LEN,
            disallowed_words: DEFAULT_DISALLOWED_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            report_skips: false,
        }
    }
}

impl LoaderConfig {
    /// Default settings reading from `path`
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let parse_error = |message: String| Error::ConfigParse {
            path: path.display().to_string(),
            message,
        };

        let config: Self = match extension {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
                    extension
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a usable load
    pub fn validate(&self) -> Result<()> {
        if self.max_len <= RESERVED_MARKERS {
            return Err(Error::InvalidConfig(format!(
                "max_len must be greater than {}, got {}",
                RESERVED_MARKERS, self.max_len
            )));
        }
        self.disallowed_filter()?;
        Ok(())
    }

    /// Build the substring filter for `disallowed_words`
    pub fn disallowed_filter(&self) -> Result<DisallowedFilter> {
        Ok(DisallowedFilter::new(self.disallowed_words.iter().cloned())?)
    }
}
