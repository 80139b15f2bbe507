//! Aligner and builder
//!
//! Bundles the engine configuration with a verse tokenizer so callers can
//! merge and unmerge from raw verse text.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::merge::merge_into_reference;
use crate::order::ReferenceOrdering;
use crate::unmerge::{unmerge_with_reference, Unmerged};
use versalign_core::{Alignment, TokenizerConfig, VerseObject, VerseTokenizer, WordObject};

/// Merges alignment data into verse trees and back
///
/// Holds no per-call state, so one aligner can be shared across threads.
#[derive(Debug)]
pub struct Aligner {
    tokenizer: VerseTokenizer,
    config: EngineConfig,
}

impl Aligner {
    /// Create an aligner with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an aligner with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let tokenizer = VerseTokenizer::new(&config.tokenizer)?.with_word_tag(&config.word_tag);
        Ok(Self { tokenizer, config })
    }

    /// Create an aligner around a caller-supplied tokenizer
    pub fn with_tokenizer(tokenizer: VerseTokenizer, config: EngineConfig) -> Self {
        let tokenizer = tokenizer.with_word_tag(&config.word_tag);
        Self { tokenizer, config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tokenizer used for verse text
    pub fn tokenizer(&self) -> &VerseTokenizer {
        &self.tokenizer
    }

    /// Rebuild the verse tree for `verse_text` from alignment data
    pub fn merge(
        &self,
        alignments: &[Alignment],
        word_bank: &[WordObject],
        verse_text: &str,
    ) -> Result<Vec<VerseObject>> {
        let reference = self.tokenizer.tokenize(verse_text);
        merge_into_reference(&reference, alignments, word_bank, &self.config)
    }

    /// Recover alignments and the word bank from a verse tree
    pub fn unmerge(&self, verse_objects: &[VerseObject], reference: &ReferenceOrdering) -> Unmerged {
        let tokens = reference.to_tokens(&self.tokenizer);
        unmerge_with_reference(verse_objects, &tokens)
    }
}

/// Builder for [`Aligner`]
#[derive(Debug, Clone, Default)]
pub struct AlignerBuilder {
    config: EngineConfig,
}

impl AlignerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word tag
    pub fn word_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.config.word_tag = tag.into();
        self
    }

    /// Set the milestone tag
    pub fn milestone_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.config.milestone_tag = tag.into();
        self
    }

    /// Set the tokenizer configuration
    pub fn tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.config.tokenizer = tokenizer;
        self
    }

    /// Use the strict tokenizer preset
    pub fn strict(mut self) -> Self {
        self.config.tokenizer = TokenizerConfig::strict();
        self
    }

    /// Build the aligner
    pub fn build(self) -> Result<Aligner> {
        Aligner::with_config(self.config)
    }
}
