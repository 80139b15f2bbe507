//! Occurrence-tagged tokenization
//!
//! Identical words in a verse are told apart by `(text, occurrence,
//! occurrences)`. This module produces that tagging from raw verse text and
//! recomputes it for verse-object lists whose tags may be stale.

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::tokenizer::{
    MarkupSegmenter, PunctuationTokenizer, Segment, Token, UsfmSegmenter, WordTokenizer,
};
use crate::types::{VerseObject, WordNode, WordObject, WORD_TAG};
use crate::words::sort_word_objects;
use std::collections::HashMap;

/// Turns verse text into occurrence-tagged verse objects
pub struct VerseTokenizer {
    segmenter: Box<dyn MarkupSegmenter>,
    words: Box<dyn WordTokenizer>,
    word_tag: String,
}

impl std::fmt::Debug for VerseTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerseTokenizer")
            .field("segmenter", &"<dyn MarkupSegmenter>")
            .field("words", &"<dyn WordTokenizer>")
            .field("word_tag", &self.word_tag)
            .finish()
    }
}

impl VerseTokenizer {
    /// Create a tokenizer using the default collaborators
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        Ok(Self::with_collaborators(
            Box::new(UsfmSegmenter::new(config)),
            Box::new(PunctuationTokenizer::new(config)?),
        ))
    }

    /// Create a tokenizer from caller-supplied collaborators
    pub fn with_collaborators(
        segmenter: Box<dyn MarkupSegmenter>,
        words: Box<dyn WordTokenizer>,
    ) -> Self {
        Self {
            segmenter,
            words,
            word_tag: WORD_TAG.to_string(),
        }
    }

    /// Tag applied to produced word nodes
    pub fn with_word_tag(mut self, tag: impl Into<String>) -> Self {
        self.word_tag = tag.into();
        self
    }

    /// Tag applied to produced word nodes
    pub fn word_tag(&self) -> &str {
        &self.word_tag
    }

    /// Tokenize verse text into ordered, occurrence-tagged verse objects.
    ///
    /// Footnotes pass through as opaque nodes and contribute no words. The
    /// occurrence is capped at the occurrence count in case the tokenizer
    /// splits the joined text differently from the individual segments.
    pub fn tokenize(&self, text: &str) -> Vec<VerseObject> {
        if text.is_empty() {
            return Vec::new();
        }

        let segments = self.segmenter.segment(text);
        let words_text = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut verse_objects = Vec::new();
        let mut word_index = 0;
        for segment in segments.iter() {
            match segment {
                Segment::Text(text) => {
                    for token in self.words.tokenize_with_punctuation(text) {
                        match token {
                            Token::Word(word) => {
                                let occurrences =
                                    self.words.occurrences_in_string(&words_text, word);
                                let occurrence = self
                                    .words
                                    .occurrence_in_string(&words_text, word_index, word)
                                    .min(occurrences);
                                word_index += 1;
                                verse_objects.push(VerseObject::Word(WordNode {
                                    tag: self.word_tag.clone(),
                                    ..WordNode::new(word, occurrence, occurrences)
                                }));
                            }
                            Token::Punctuation(text) => verse_objects.push(VerseObject::text(text)),
                        }
                    }
                }
                Segment::Footnote {
                    tag,
                    end_tag,
                    content,
                } => verse_objects.push(VerseObject::footnote(
                    tag.as_str(),
                    end_tag.as_str(),
                    content.as_str(),
                )),
                Segment::Marker(raw) => verse_objects.push(VerseObject::text(raw.as_str())),
            }
        }
        verse_objects
    }

    /// Tokenize into word records only
    pub fn word_objects(&self, text: &str) -> Vec<WordObject> {
        self.tokenize(text)
            .iter()
            .filter_map(VerseObject::as_word)
            .map(WordObject::from)
            .collect()
    }

    /// Sort word records by where their identity occurs in `text`
    pub fn sort_word_objects_by_string(
        &self,
        word_objects: &[WordObject],
        text: &str,
    ) -> Vec<WordObject> {
        sort_word_objects(word_objects, &self.word_objects(text))
    }
}

impl Default for VerseTokenizer {
    fn default() -> Self {
        Self::with_collaborators(
            Box::new(UsfmSegmenter::default()),
            Box::new(PunctuationTokenizer::default()),
        )
    }
}

/// Recompute occurrence tags of top-level word nodes from position and text.
///
/// Milestones are neither counted nor descended into.
pub fn recompute_occurrences(verse_objects: &[VerseObject]) -> Vec<VerseObject> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for word in verse_objects.iter().filter_map(VerseObject::as_word) {
        *totals.entry(word.text.as_str()).or_default() += 1;
    }

    let mut seen: HashMap<&str, u32> = HashMap::new();
    verse_objects
        .iter()
        .map(|verse_object| match verse_object {
            VerseObject::Word(word) => {
                let count = seen.entry(word.text.as_str()).or_default();
                *count += 1;
                VerseObject::Word(WordNode {
                    occurrence: *count,
                    occurrences: totals[word.text.as_str()],
                    ..word.clone()
                })
            }
            other => other.clone(),
        })
        .collect()
}

/// Recompute occurrence tags across a list of word records
pub fn populate_occurrences(word_objects: &[WordObject]) -> Vec<WordObject> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for word in word_objects {
        *totals.entry(word.word.as_str()).or_default() += 1;
    }

    let mut seen: HashMap<&str, u32> = HashMap::new();
    word_objects
        .iter()
        .map(|word| {
            let count = seen.entry(word.word.as_str()).or_default();
            *count += 1;
            WordObject {
                occurrence: *count,
                occurrences: totals[word.word.as_str()],
                ..word.clone()
            }
        })
        .collect()
}
