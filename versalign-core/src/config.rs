//! Tokenizer configuration

use serde::{Deserialize, Serialize};

/// Settings for the default markup segmenter and word tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Note markers whose bodies are kept as opaque footnote content
    /// (`f` matches `\f ... \f*`)
    pub note_markers: Vec<String>,
    /// Characters kept inside a word when flanked by word characters
    pub word_joiners: Vec<char>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            note_markers: vec!["f".to_string(), "fe".to_string(), "x".to_string()],
            word_joiners: vec!['\'', '\u{2019}'],
        }
    }
}

impl TokenizerConfig {
    /// Configuration with no word joiners: every apostrophe splits words
    pub fn strict() -> Self {
        Self {
            word_joiners: Vec::new(),
            ..Self::default()
        }
    }
}
