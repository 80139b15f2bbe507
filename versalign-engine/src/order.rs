//! Alignment ordering against a source-language reference
//!
//! Unmerged alignment groups come out in tree order, which is target-language
//! order. Hosts want them in source-language order, so each reference token is
//! matched to the alignment that starts with it.

use serde::{Deserialize, Serialize};
use versalign_core::{
    recompute_occurrences, word_list, Alignment, VerseObject, VerseTokenizer, WordObject,
};

/// The source-language verse used to order alignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceOrdering {
    /// Raw verse text, tokenized before use
    Text(String),
    /// A verse-object tree; its word nodes are used
    VerseObjects(Vec<VerseObject>),
    /// Word records, used as given
    Words(Vec<WordObject>),
}

impl From<&str> for ReferenceOrdering {
    fn from(text: &str) -> Self {
        ReferenceOrdering::Text(text.to_string())
    }
}

impl From<Vec<WordObject>> for ReferenceOrdering {
    fn from(words: Vec<WordObject>) -> Self {
        ReferenceOrdering::Words(words)
    }
}

impl From<Vec<VerseObject>> for ReferenceOrdering {
    fn from(verse_objects: Vec<VerseObject>) -> Self {
        ReferenceOrdering::VerseObjects(verse_objects)
    }
}

/// One token of the normalized reference
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceToken {
    /// A source word with its occurrence pair
    Word(WordObject),
    /// Punctuation between words
    Punctuation(String),
}

impl ReferenceOrdering {
    /// Normalize into an ordered token list
    pub fn to_tokens(&self, tokenizer: &VerseTokenizer) -> Vec<ReferenceToken> {
        match self {
            ReferenceOrdering::Text(text) => tokenizer
                .tokenize(text)
                .iter()
                .filter_map(|verse_object| match verse_object {
                    VerseObject::Word(word) => Some(ReferenceToken::Word(word.into())),
                    VerseObject::Text(text) => Some(ReferenceToken::Punctuation(text.text.clone())),
                    VerseObject::Milestone(_) | VerseObject::Footnote(_) => None,
                })
                .collect(),
            ReferenceOrdering::VerseObjects(verse_objects) => {
                recompute_occurrences(&word_list(verse_objects))
                    .iter()
                    .filter_map(VerseObject::to_word_object)
                    .map(ReferenceToken::Word)
                    .collect()
            }
            ReferenceOrdering::Words(words) => {
                words.iter().cloned().map(ReferenceToken::Word).collect()
            }
        }
    }
}

/// Order `pool` by the reference.
///
/// For each reference word, in order of precedence:
/// 1. a pooled alignment whose first top word matches moves to the output;
/// 2. failing that, the word is retried with the following punctuation
///    folded onto it;
/// 3. a pooled alignment with a matching top word anywhere moves to the
///    output;
/// 4. an already placed alignment with a matching top word consumes the word;
/// 5. otherwise an alignment with the word alone and no bottom words is added.
///
/// Pooled alignments that never match are appended in their original order.
pub fn order_alignments(reference: &[ReferenceToken], mut pool: Vec<Alignment>) -> Vec<Alignment> {
    let mut ordered: Vec<Alignment> = Vec::with_capacity(pool.len());

    for (position, token) in reference.iter().enumerate() {
        let ReferenceToken::Word(word) = token else {
            continue;
        };

        let mut found = index_of_first_top_word(&pool, word);
        if found.is_none() {
            if let Some(ReferenceToken::Punctuation(punctuation)) = reference.get(position + 1) {
                let folded = WordObject {
                    word: format!("{}{}", word.word, punctuation.trim()),
                    ..word.clone()
                };
                found = index_of_first_top_word(&pool, &folded);
                if found.is_some() {
                    tracing::trace!(word = folded.word.as_str(), "order: matched with punctuation");
                }
            }
        }
        if found.is_none() {
            found = index_of_any_top_word(&pool, word);
        }

        if let Some(index) = found {
            ordered.push(pool.remove(index));
        } else if index_of_any_top_word(&ordered, word).is_some() {
            tracing::trace!(word = word.word.as_str(), "order: already placed");
        } else {
            tracing::trace!(word = word.word.as_str(), "order: unaligned source word");
            ordered.push(Alignment::new(vec![word.clone()], Vec::new()));
        }
    }

    if !pool.is_empty() {
        tracing::warn!(
            count = pool.len(),
            "order: alignments missing from the reference appended unordered"
        );
        ordered.append(&mut pool);
    }
    ordered
}

fn index_of_first_top_word(alignments: &[Alignment], word: &WordObject) -> Option<usize> {
    alignments.iter().position(|alignment| {
        alignment
            .top_words
            .first()
            .is_some_and(|top| top.same_occurrence_of(word))
    })
}

fn index_of_any_top_word(alignments: &[Alignment], word: &WordObject) -> Option<usize> {
    alignments.iter().position(|alignment| {
        alignment
            .top_words
            .iter()
            .any(|top| top.same_occurrence_of(word))
    })
}
