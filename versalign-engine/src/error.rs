//! Layered error types
//!
//! Every engine failure is fatal to the call and leaves no partial result.

use thiserror::Error;
use versalign_core::CoreError;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Words of the verse text that no alignment data accounts for
    #[error("the words \"{}\" from the target language verse are not in the alignment data", .words.join(", "))]
    Coverage {
        /// Offending words in verse order
        words: Vec<String>,
    },

    /// A word in the alignment data that the verse text does not contain
    #[error("word \"{word}\" ({occurrence} of {occurrences}) not found in the verse text")]
    Lookup {
        /// The missing word
        word: String,
        /// Its occurrence
        occurrence: u32,
        /// Its occurrence count
        occurrences: u32,
    },

    /// Malformed input shape
    #[error("malformed alignment data: {reason}")]
    Structural {
        /// What was wrong with the input
        reason: String,
    },
}

/// Coarse classification of an [`EngineError`] for hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`EngineError::Coverage`]
    Coverage,
    /// [`EngineError::Lookup`]
    Lookup,
    /// [`EngineError::Structural`]
    Structural,
}

impl EngineError {
    /// Build a structural error from any message
    pub fn structural(reason: impl Into<String>) -> Self {
        EngineError::Structural {
            reason: reason.into(),
        }
    }

    /// The error's kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Coverage { .. } => ErrorKind::Coverage,
            EngineError::Lookup { .. } => ErrorKind::Lookup,
            EngineError::Structural { .. } => ErrorKind::Structural,
        }
    }
}

impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        EngineError::structural(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
