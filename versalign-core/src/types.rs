//! Type definitions for verse objects and alignment data
//!
//! The serialized shape of every type here matches the JSON that host
//! applications store: verse objects are tagged by `"type"`, alignment
//! records use `topWords`/`bottomWords`, and optional linguistic attributes
//! (`strong`, `lemma`, `morph`, ...) ride along in a flattened map.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Tag given to target-language word nodes
pub const WORD_TAG: &str = "w";

/// Tag given to alignment milestones
pub const MILESTONE_TAG: &str = "zaln";

/// Optional attributes carried alongside a word (`strong`, `lemma`, `morph`, ...)
pub type Attributes = BTreeMap<String, Value>;

// ============================================================================
// Verse Objects
// ============================================================================

/// A node in the ordered verse tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VerseObject {
    /// A single word instance
    Word(WordNode),
    /// Punctuation or whitespace rendered verbatim
    Text(TextNode),
    /// A span marker wrapping nested verse objects
    Milestone(MilestoneNode),
    /// An opaque annotation, never decomposed into words
    Footnote(FootnoteNode),
}

/// Discriminant of a [`VerseObject`], used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`VerseObject::Word`]
    Word,
    /// [`VerseObject::Text`]
    Text,
    /// [`VerseObject::Milestone`]
    Milestone,
    /// [`VerseObject::Footnote`]
    Footnote,
}

/// Word node payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordNode {
    /// Markup tag, normally [`WORD_TAG`]
    pub tag: String,
    /// Surface text of the word
    pub text: String,
    /// 1-based position among identical words
    #[serde(deserialize_with = "occurrence::deserialize")]
    pub occurrence: u32,
    /// Count of identical words in the verse
    #[serde(deserialize_with = "occurrence::deserialize")]
    pub occurrences: u32,
    /// Extra attributes
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Text node payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    /// Verbatim text
    pub text: String,
}

/// Milestone node payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneNode {
    /// Markup tag, normally [`MILESTONE_TAG`]
    pub tag: String,
    /// Source word or phrase this span represents
    pub content: String,
    /// 1-based position among identical source words
    #[serde(deserialize_with = "occurrence::deserialize")]
    pub occurrence: u32,
    /// Count of identical source words in the verse
    #[serde(deserialize_with = "occurrence::deserialize")]
    pub occurrences: u32,
    /// Wrapped nodes; the innermost milestone holds the aligned words
    pub children: Vec<VerseObject>,
    /// Extra attributes
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Footnote node payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteNode {
    /// Opening marker, e.g. `f`
    pub tag: String,
    /// Closing marker, e.g. `f*`
    #[serde(rename = "endTag")]
    pub end_tag: String,
    /// Raw footnote body
    pub content: String,
}

impl VerseObject {
    /// Create a word node with the default word tag
    pub fn word(text: impl Into<String>, occurrence: u32, occurrences: u32) -> Self {
        VerseObject::Word(WordNode::new(text, occurrence, occurrences))
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        VerseObject::Text(TextNode { text: text.into() })
    }

    /// Create a footnote node
    pub fn footnote(
        tag: impl Into<String>,
        end_tag: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        VerseObject::Footnote(FootnoteNode {
            tag: tag.into(),
            end_tag: end_tag.into(),
            content: content.into(),
        })
    }

    /// The node's discriminant
    pub fn kind(&self) -> NodeKind {
        match self {
            VerseObject::Word(_) => NodeKind::Word,
            VerseObject::Text(_) => NodeKind::Text,
            VerseObject::Milestone(_) => NodeKind::Milestone,
            VerseObject::Footnote(_) => NodeKind::Footnote,
        }
    }

    /// Renderable text of a word or text node
    pub fn text_content(&self) -> Option<&str> {
        match self {
            VerseObject::Word(word) => Some(&word.text),
            VerseObject::Text(text) => Some(&text.text),
            VerseObject::Milestone(_) | VerseObject::Footnote(_) => None,
        }
    }

    /// Nested nodes, if this node can have any
    pub fn children(&self) -> Option<&[VerseObject]> {
        match self {
            VerseObject::Milestone(milestone) => Some(&milestone.children),
            _ => None,
        }
    }

    /// Borrow the word payload
    pub fn as_word(&self) -> Option<&WordNode> {
        match self {
            VerseObject::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Borrow the milestone payload
    pub fn as_milestone(&self) -> Option<&MilestoneNode> {
        match self {
            VerseObject::Milestone(milestone) => Some(milestone),
            _ => None,
        }
    }
}

impl WordNode {
    /// Create a word node with the default word tag and no attributes
    pub fn new(text: impl Into<String>, occurrence: u32, occurrences: u32) -> Self {
        Self {
            tag: WORD_TAG.to_string(),
            text: text.into(),
            occurrence,
            occurrences,
            attributes: Attributes::new(),
        }
    }

    /// True when both nodes denote the same word instance
    pub fn same_identity(&self, other: &WordNode) -> bool {
        self.text == other.text
            && self.occurrence == other.occurrence
            && self.occurrences == other.occurrences
    }
}

impl MilestoneNode {
    /// Create a milestone with the default milestone tag and no children
    pub fn new(content: impl Into<String>, occurrence: u32, occurrences: u32) -> Self {
        Self {
            tag: MILESTONE_TAG.to_string(),
            content: content.into(),
            occurrence,
            occurrences,
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// Replace the children, builder style
    pub fn with_children(mut self, children: Vec<VerseObject>) -> Self {
        self.children = children;
        self
    }
}

impl From<WordNode> for VerseObject {
    fn from(word: WordNode) -> Self {
        VerseObject::Word(word)
    }
}

impl From<MilestoneNode> for VerseObject {
    fn from(milestone: MilestoneNode) -> Self {
        VerseObject::Milestone(milestone)
    }
}

// ============================================================================
// Alignment Data
// ============================================================================

/// Flat word record used inside alignments and the word bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordObject {
    /// Surface text of the word
    pub word: String,
    /// 1-based position among identical words
    #[serde(deserialize_with = "occurrence::deserialize")]
    pub occurrence: u32,
    /// Count of identical words in the verse
    #[serde(deserialize_with = "occurrence::deserialize")]
    pub occurrences: u32,
    /// Optional linguistic attributes
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl WordObject {
    /// Create a word object without attributes
    pub fn new(word: impl Into<String>, occurrence: u32, occurrences: u32) -> Self {
        Self {
            word: word.into(),
            occurrence,
            occurrences,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, builder style
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// True when this record denotes the given word node instance
    pub fn matches_node(&self, node: &WordNode) -> bool {
        self.word == node.text
            && self.occurrence == node.occurrence
            && self.occurrences == node.occurrences
    }

    /// True when `word` and `occurrence` agree; `occurrences` is ignored
    pub fn same_occurrence_of(&self, other: &WordObject) -> bool {
        self.word == other.word && self.occurrence == other.occurrence
    }

    /// Check `1 <= occurrence <= occurrences`
    pub fn validate(&self) -> Result<()> {
        check_occurrence(&self.word, self.occurrence, self.occurrences)
    }
}

/// A group of source words and the target words that translate them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    /// Source-language words
    pub top_words: Vec<WordObject>,
    /// Target-language words
    pub bottom_words: Vec<WordObject>,
}

impl Alignment {
    /// Create an alignment
    pub fn new(top_words: Vec<WordObject>, bottom_words: Vec<WordObject>) -> Self {
        Self {
            top_words,
            bottom_words,
        }
    }

    /// An alignment with no words at all
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

pub(crate) fn check_occurrence(word: &str, occurrence: u32, occurrences: u32) -> Result<()> {
    if occurrence == 0 || occurrence > occurrences {
        return Err(CoreError::InvalidOccurrence {
            word: word.to_string(),
            occurrence,
            occurrences,
        });
    }
    Ok(())
}

/// Hosts write occurrence values both as numbers and as numeric strings.
mod occurrence {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OccurrenceVisitor)
    }

    struct OccurrenceVisitor;

    impl Visitor<'_> for OccurrenceVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an occurrence as a non-negative integer or numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            v.trim()
                .parse::<u32>()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_word_node_wire_shape() {
        let node = VerseObject::word("son", 1, 2);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"type": "word", "tag": "w", "text": "son", "occurrence": 1, "occurrences": 2})
        );
    }

    #[test]
    fn test_footnote_end_tag_renamed() {
        let node = VerseObject::footnote("f", "f*", "note");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["endTag"], "f*");
        assert_eq!(value["type"], "footnote");
    }

    #[test]
    fn test_milestone_with_attributes_round_trips() {
        let value = json!({
            "tag": "zaln",
            "type": "milestone",
            "strong": "G52070",
            "lemma": "υἱός",
            "content": "υἱοῦ",
            "occurrence": 1,
            "occurrences": 2,
            "children": [
                {"tag": "w", "type": "word", "text": "son", "occurrence": 1, "occurrences": 2}
            ]
        });
        let node: VerseObject = serde_json::from_value(value.clone()).unwrap();
        let milestone = node.as_milestone().unwrap();
        assert_eq!(milestone.content, "υἱοῦ");
        assert_eq!(milestone.attributes["strong"], "G52070");
        assert_eq!(milestone.children.len(), 1);
        assert_eq!(serde_json::to_value(&node).unwrap(), value);
    }

    #[test]
    fn test_occurrence_accepts_numeric_strings() {
        let word: WordObject =
            serde_json::from_value(json!({"word": "of", "occurrence": "2", "occurrences": "2"}))
                .unwrap();
        assert_eq!(word.occurrence, 2);
        assert_eq!(word.occurrences, 2);
    }

    #[test]
    fn test_occurrence_rejects_garbage() {
        let result: std::result::Result<WordObject, _> =
            serde_json::from_value(json!({"word": "of", "occurrence": "two", "occurrences": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn test_milestone_requires_children() {
        let result: std::result::Result<VerseObject, _> = serde_json::from_value(json!({
            "tag": "zaln", "type": "milestone", "content": "x", "occurrence": 1, "occurrences": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_alignment_camel_case() {
        let alignment = Alignment::new(
            vec![WordObject::new("Δαυὶδ", 1, 1)],
            vec![WordObject::new("David", 1, 1)],
        );
        let value = serde_json::to_value(&alignment).unwrap();
        assert!(value.get("topWords").is_some());
        assert!(value.get("bottomWords").is_some());
    }

    #[test]
    fn test_validate_occurrence_range() {
        assert!(WordObject::new("a", 1, 1).validate().is_ok());
        assert!(WordObject::new("a", 0, 1).validate().is_err());
        assert_eq!(
            WordObject::new("a", 3, 2).validate(),
            Err(CoreError::InvalidOccurrence {
                word: "a".to_string(),
                occurrence: 3,
                occurrences: 2,
            })
        );
    }
}
