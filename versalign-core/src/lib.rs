//! Verse-object model and occurrence tagging for word alignment data
//!
//! This crate holds the deterministic building blocks shared by the merge and
//! unmerge engines: the serde data model, occurrence-tagged tokenization,
//! node conversions, consecutive-index grouping and milestone nesting. It
//! performs no I/O.

#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod error;
pub mod grouping;
pub mod milestone;
pub mod occurrence;
pub mod tokenizer;
pub mod types;
pub mod words;

// Re-export key types
pub use config::TokenizerConfig;
pub use convert::same_milestone;
pub use error::{CoreError, Result};
pub use grouping::group_consecutive;
pub use milestone::nest;
pub use occurrence::{populate_occurrences, recompute_occurrences, VerseTokenizer};
pub use tokenizer::{
    MarkupSegmenter, PunctuationTokenizer, Segment, Token, UsfmSegmenter, WordTokenizer,
};
pub use types::{
    Alignment, Attributes, FootnoteNode, MilestoneNode, NodeKind, TextNode, VerseObject,
    WordNode, WordObject, MILESTONE_TAG, WORD_TAG,
};
pub use words::{merge_verse_data, sort_word_objects, word_list, words_from_verse_objects};
