//! Conversions between tree nodes and flat word records

use crate::types::{MilestoneNode, VerseObject, WordNode, WordObject};

/// Attribute that only matters to alignment tooling, never to rendering
const TW_ATTRIBUTE: &str = "tw";

impl WordObject {
    /// Render a bottom word as a word node.
    ///
    /// Only the identity is carried over; linguistic attributes are dropped.
    pub fn to_word_node(&self, tag: &str) -> WordNode {
        WordNode {
            tag: tag.to_string(),
            ..WordNode::new(self.word.as_str(), self.occurrence, self.occurrences)
        }
    }

    /// Render a top word as an empty milestone
    pub fn to_milestone(&self, tag: &str) -> MilestoneNode {
        let mut attributes = self.attributes.clone();
        attributes.remove(TW_ATTRIBUTE);
        MilestoneNode {
            tag: tag.to_string(),
            content: self.word.clone(),
            occurrence: self.occurrence,
            occurrences: self.occurrences,
            children: Vec::new(),
            attributes,
        }
    }
}

impl From<&WordNode> for WordObject {
    fn from(node: &WordNode) -> Self {
        Self {
            word: node.text.clone(),
            occurrence: node.occurrence,
            occurrences: node.occurrences,
            attributes: node.attributes.clone(),
        }
    }
}

impl From<&MilestoneNode> for WordObject {
    fn from(node: &MilestoneNode) -> Self {
        Self {
            word: node.content.clone(),
            occurrence: node.occurrence,
            occurrences: node.occurrences,
            attributes: node.attributes.clone(),
        }
    }
}

impl VerseObject {
    /// Flat record for a word or milestone node
    pub fn to_word_object(&self) -> Option<WordObject> {
        match self {
            VerseObject::Word(word) => Some(word.into()),
            VerseObject::Milestone(milestone) => Some(milestone.into()),
            VerseObject::Text(_) | VerseObject::Footnote(_) => None,
        }
    }
}

/// True when `a` and `b` are pieces of the same logical milestone:
/// same kind, same content, same occurrence.
///
/// Only milestones carry content, so any other pair is never the same.
/// Words in particular never match, even when text and occurrence agree, so
/// unaligned words keep their verse order when gathered into a word bank.
pub fn same_milestone(a: &VerseObject, b: &VerseObject) -> bool {
    match (a, b) {
        (VerseObject::Milestone(a), VerseObject::Milestone(b)) => {
            a.content == b.content && a.occurrence == b.occurrence
        }
        _ => false,
    }
}
