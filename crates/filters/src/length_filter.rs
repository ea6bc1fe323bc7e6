//! Length-based filtering for poem content

/// Slots held back from the sequence length for start/end markers
pub const RESERVED_MARKERS: usize = 2;

/// Filter configuration for length-based filtering
///
/// Lengths are counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthFilterConfig {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl LengthFilterConfig {
    /// Bound content so it fits a model sequence of `max_len` once the
    /// start and end markers are added.
    pub fn for_sequence_len(max_len: usize) -> Self {
        Self {
            min_length: None,
            max_length: Some(max_len.saturating_sub(RESERVED_MARKERS)),
        }
    }
}

/// Check if a text passes the length filter
pub fn passes_length_filter(text: &str, config: &LengthFilterConfig) -> bool {
    let length = text.chars().count();

    if let Some(min) = config.min_length {
        if length < min {
            return false;
        }
    }

    if let Some(max) = config.max_length {
        if length > max {
            return false;
        }
    }

    true
}
