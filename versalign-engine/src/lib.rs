//! Merge and unmerge engines for verse alignment data
//!
//! Merge rebuilds a nested verse-object tree from alignments, the word bank
//! and the verse text. Unmerge takes such a tree apart again and orders the
//! alignments by a source-language reference.

#![warn(missing_docs)]

pub mod aligner;
pub mod config;
pub mod error;
pub mod merge;
pub mod order;
pub mod unmerge;

// Re-export key types
pub use aligner::{Aligner, AlignerBuilder};
pub use config::EngineConfig;
pub use error::{EngineError, ErrorKind, Result};
pub use merge::merge_into_reference;
pub use order::{order_alignments, ReferenceOrdering, ReferenceToken};
pub use unmerge::{unmerge_with_reference, Unmerged};

// Re-export from core for convenience
pub use versalign_core::{Alignment, VerseObject, WordObject};
