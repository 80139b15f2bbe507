//! Core error types (deterministic only)

use thiserror::Error;

/// Core model errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A milestone chain needs at least one milestone
    #[error("cannot nest an empty list of milestones")]
    EmptyMilestoneChain,

    /// Occurrence outside `1..=occurrences`
    #[error("occurrence {occurrence} of \"{word}\" is outside 1..={occurrences}")]
    InvalidOccurrence {
        /// The word carrying the bad occurrence pair
        word: String,
        /// Offending occurrence
        occurrence: u32,
        /// Offending occurrence count
        occurrences: u32,
    },

    /// Tokenizer settings could not be compiled
    #[error("invalid tokenizer configuration: {0}")]
    InvalidTokenizerConfig(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
