//! Data Transfer Objects for host payloads

use serde::{Deserialize, Serialize};
use versalign_core::{Alignment, VerseObject, WordObject};

/// A verse tree as hosts send it: bare or wrapped in `verseObjects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersePayload {
    /// `{"verseObjects": [...]}`
    Wrapped {
        /// The verse tree
        #[serde(rename = "verseObjects")]
        verse_objects: Vec<VerseObject>,
    },
    /// `[...]`
    Bare(Vec<VerseObject>),
}

impl VersePayload {
    /// The verse tree, whichever way it was sent
    pub fn into_verse_objects(self) -> Vec<VerseObject> {
        match self {
            VersePayload::Wrapped { verse_objects } | VersePayload::Bare(verse_objects) => {
                verse_objects
            }
        }
    }
}

/// Alignments plus the word bank, as exchanged with hosts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignmentData {
    /// Alignment groups
    #[serde(rename = "alignment", alias = "alignments")]
    pub alignments: Vec<Alignment>,
    /// Unaligned target words
    #[serde(rename = "wordBank", default)]
    pub word_bank: Vec<WordObject>,
}

impl From<versalign_engine::Unmerged> for AlignmentData {
    fn from(unmerged: versalign_engine::Unmerged) -> Self {
        Self {
            alignments: unmerged.alignment,
            word_bank: unmerged.word_bank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verse_payload_shapes() {
        let word = json!({"type": "word", "tag": "w", "text": "a", "occurrence": 1, "occurrences": 1});
        let bare: VersePayload = serde_json::from_value(json!([word.clone()])).unwrap();
        let wrapped: VersePayload =
            serde_json::from_value(json!({"verseObjects": [word]})).unwrap();
        assert_eq!(bare.into_verse_objects(), wrapped.into_verse_objects());
    }

    #[test]
    fn test_alignment_data_wire_keys() {
        let value = serde_json::to_value(AlignmentData::default()).unwrap();
        assert_eq!(value, json!({"alignment": [], "wordBank": []}));

        let plural: AlignmentData =
            serde_json::from_value(json!({"alignments": [], "wordBank": []})).unwrap();
        assert!(plural.alignments.is_empty());
    }

    #[test]
    fn test_alignment_data_accepts_string_occurrences() {
        let data: AlignmentData = serde_json::from_value(json!({
            "alignment": [{"topWords": [], "bottomWords": []}],
            "wordBank": [{"word": "a", "occurrence": "1", "occurrences": "1"}]
        }))
        .unwrap();
        assert_eq!(data.alignments.len(), 1);
        assert_eq!(data.word_bank[0], WordObject::new("a", 1, 1));
    }

    #[test]
    fn test_alignment_data_requires_alignments() {
        let result: Result<AlignmentData, _> = serde_json::from_value(json!({"wordBank": []}));
        assert!(result.is_err());
    }
}
