//! Public API for merging and unmerging verse alignment data
//!
//! This crate accepts and produces the JSON shapes host applications store:
//! verse-object trees, `{alignment, wordBank}` records and reference verses
//! given as text, word lists or verse trees.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use serde::de::DeserializeOwned;
use versalign_engine::Aligner;

// Re-export key types
pub use config::{Config, ConfigBuilder, TagConfig};
pub use dto::{AlignmentData, VersePayload};
pub use error::ApiError;
pub use versalign_core::{Alignment, VerseObject, WordObject};
pub use versalign_engine::{ReferenceOrdering, Unmerged};

/// Main entry point for merging and unmerging
#[derive(Debug)]
pub struct VerseAligner {
    inner: Aligner,
    config: Config,
}

impl VerseAligner {
    /// Create an aligner with the embedded default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an aligner with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = Aligner::with_config(config.to_engine_config())?;
        Ok(Self { inner, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebuild the verse tree for `verse_text`
    pub fn merge(
        &self,
        alignments: &[Alignment],
        word_bank: &[WordObject],
        verse_text: &str,
    ) -> Result<Vec<VerseObject>> {
        Ok(self.inner.merge(alignments, word_bank, verse_text)?)
    }

    /// Recover alignment data from a verse tree
    pub fn unmerge(
        &self,
        verse_objects: &[VerseObject],
        reference: &ReferenceOrdering,
    ) -> AlignmentData {
        self.inner.unmerge(verse_objects, reference).into()
    }

    /// Merge a JSON `{alignment, wordBank}` payload, returning the verse tree as JSON
    pub fn merge_json(&self, alignment_data: &str, verse_text: &str) -> Result<String> {
        let data: AlignmentData = parse_payload("alignment data", alignment_data)?;
        let verse_objects = self.merge(&data.alignments, &data.word_bank, verse_text)?;
        Ok(serde_json::to_string(&verse_objects)?)
    }

    /// Unmerge a JSON verse tree against a JSON reference (a string, a word
    /// list or a verse tree), returning `{alignment, wordBank}` as JSON
    ///
    /// Only `word`, `text`, `milestone` and `footnote` nodes are accepted.
    /// A tree holding any other node type, such as a `paragraph` marker, is
    /// rejected as a structural error rather than skipped.
    pub fn unmerge_json(&self, verse_objects: &str, reference: &str) -> Result<String> {
        let verse_objects = parse_payload::<VersePayload>("verse objects", verse_objects)?
            .into_verse_objects();
        let reference: ReferenceOrdering = parse_payload("reference ordering", reference)?;
        let data = self.unmerge(&verse_objects, &reference);
        Ok(serde_json::to_string(&data)?)
    }
}

fn parse_payload<T: DeserializeOwned>(what: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| ApiError::payload(what, e))
}

// Convenience functions

/// Merge with the default configuration
pub fn merge(
    alignments: &[Alignment],
    word_bank: &[WordObject],
    verse_text: &str,
) -> Result<Vec<VerseObject>> {
    VerseAligner::new()?.merge(alignments, word_bank, verse_text)
}

/// Unmerge with the default configuration
pub fn unmerge(
    verse_objects: &[VerseObject],
    reference: impl Into<ReferenceOrdering>,
) -> Result<AlignmentData> {
    Ok(VerseAligner::new()?.unmerge(verse_objects, &reference.into()))
}
