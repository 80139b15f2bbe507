//! Tokenizer collaborators
//!
//! Two seams feed the occurrence model: a [`MarkupSegmenter`] that isolates
//! notes and markers, and a [`WordTokenizer`] that splits plain text into
//! words and punctuation. Both ship with default implementations and can be
//! replaced through the traits.

pub mod markup;

pub use markup::{MarkupSegmenter, Segment, UsfmSegmenter};

use crate::config::TokenizerConfig;
use crate::error::{CoreError, Result};
use regex::Regex;

/// A token borrowed from the tokenized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of word characters
    Word(&'a str),
    /// Punctuation, possibly with surrounding whitespace
    Punctuation(&'a str),
}

/// Word and punctuation tokenizer primitives
pub trait WordTokenizer: Send + Sync {
    /// Split text into words and punctuation; whitespace-only runs are dropped
    fn tokenize_with_punctuation<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    /// Words only, in order
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenize_with_punctuation(text)
            .into_iter()
            .filter_map(|token| match token {
                Token::Word(word) => Some(word),
                Token::Punctuation(_) => None,
            })
            .collect()
    }

    /// Occurrence of `token` counting words up to and including `index`
    fn occurrence_in_string(&self, text: &str, index: usize, token: &str) -> u32 {
        let words = self.tokenize(text);
        let end = (index + 1).min(words.len());
        words[..end].iter().filter(|word| **word == token).count() as u32
    }

    /// Total occurrences of `token` among the words of `text`
    fn occurrences_in_string(&self, text: &str, token: &str) -> u32 {
        self.tokenize(text)
            .iter()
            .filter(|word| **word == token)
            .count() as u32
    }

    /// True when `token` tokenizes to exactly itself as one word
    fn is_word(&self, token: &str) -> bool {
        self.tokenize(token) == [token]
    }
}

/// Regex-backed tokenizer: words are runs of Unicode word characters,
/// optionally joined by configured characters such as apostrophes
#[derive(Debug, Clone)]
pub struct PunctuationTokenizer {
    word_pattern: Regex,
}

impl PunctuationTokenizer {
    /// Build a tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        let pattern = if config.word_joiners.is_empty() {
            r"\w+".to_string()
        } else {
            let joiners: String = config
                .word_joiners
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            format!(r"\w+(?:[{joiners}]\w+)*")
        };
        let word_pattern =
            Regex::new(&pattern).map_err(|e| CoreError::InvalidTokenizerConfig(e.to_string()))?;
        Ok(Self { word_pattern })
    }
}

impl Default for PunctuationTokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default()).expect("default word pattern is valid")
    }
}

impl WordTokenizer for PunctuationTokenizer {
    fn tokenize_with_punctuation<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last = 0;
        for found in self.word_pattern.find_iter(text) {
            push_gap(&mut tokens, &text[last..found.start()]);
            tokens.push(Token::Word(found.as_str()));
            last = found.end();
        }
        push_gap(&mut tokens, &text[last..]);
        tokens
    }
}

fn push_gap<'a>(tokens: &mut Vec<Token<'a>>, gap: &'a str) {
    if !gap.trim().is_empty() {
        tokens.push(Token::Punctuation(gap));
    }
}
