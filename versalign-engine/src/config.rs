//! Configuration types for the engine

use versalign_core::{TokenizerConfig, MILESTONE_TAG, WORD_TAG};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tag given to rebuilt word nodes
    pub word_tag: String,
    /// Tag given to rebuilt milestones
    pub milestone_tag: String,
    /// Settings for tokenizing verse text
    pub tokenizer: TokenizerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_tag: WORD_TAG.to_string(),
            milestone_tag: MILESTONE_TAG.to_string(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Default tags with no apostrophe joining in words
    pub fn strict() -> Self {
        Self {
            tokenizer: TokenizerConfig::strict(),
            ..Self::default()
        }
    }
}
