//! Unmerge engine
//!
//! Decomposes a verse-object tree into alignments and a word bank. A milestone
//! split by unaligned words appears more than once at the top level; its
//! pieces are gathered back into one alignment.

use crate::order::{order_alignments, ReferenceToken};
use serde::{Deserialize, Serialize};
use versalign_core::{same_milestone, Alignment, VerseObject, WordObject};

/// Alignment data recovered from a verse-object tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unmerged {
    /// Alignments in reference order
    pub alignment: Vec<Alignment>,
    /// Words not under any milestone
    #[serde(rename = "wordBank")]
    pub word_bank: Vec<WordObject>,
}

/// Split `verse_objects` into alignments and a word bank, ordering the
/// alignments by `reference`.
pub fn unmerge_with_reference(
    verse_objects: &[VerseObject],
    reference: &[ReferenceToken],
) -> Unmerged {
    let mut groups: Vec<(&VerseObject, Alignment)> = Vec::new();
    for verse_object in verse_objects {
        let existing = groups
            .iter()
            .position(|(seed, _)| same_milestone(seed, verse_object));
        let index = match existing {
            Some(index) => index,
            None => {
                groups.push((verse_object, Alignment::empty()));
                groups.len() - 1
            }
        };
        absorb(verse_object, &mut groups[index].1);
    }

    let mut word_bank = Vec::new();
    let mut pool = Vec::new();
    for (_, alignment) in groups {
        if alignment.top_words.is_empty() {
            word_bank.extend(alignment.bottom_words);
        } else {
            pool.push(alignment);
        }
    }

    tracing::debug!(
        nodes = verse_objects.len(),
        alignments = pool.len(),
        word_bank = word_bank.len(),
        reference = reference.len(),
        "unmerge: grouped verse tree"
    );

    Unmerged {
        alignment: order_alignments(reference, pool),
        word_bank,
    }
}

/// Add a node and its descendants to `alignment`
fn absorb(verse_object: &VerseObject, alignment: &mut Alignment) {
    match verse_object {
        VerseObject::Milestone(milestone) if !milestone.children.is_empty() => {
            let top_word = WordObject::from(milestone);
            if !alignment
                .top_words
                .iter()
                .any(|existing| existing.same_occurrence_of(&top_word))
            {
                alignment.top_words.push(top_word);
            }
            for child in &milestone.children {
                absorb(child, alignment);
            }
        }
        VerseObject::Word(word) => alignment.bottom_words.push(WordObject::from(word)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versalign_core::MilestoneNode;

    fn milestone(content: &str, children: Vec<VerseObject>) -> VerseObject {
        VerseObject::Milestone(MilestoneNode::new(content, 1, 1).with_children(children))
    }

    fn reference(words: &[&str]) -> Vec<ReferenceToken> {
        words
            .iter()
            .map(|w| ReferenceToken::Word(WordObject::new(*w, 1, 1)))
            .collect()
    }

    #[test]
    fn test_words_outside_milestones_go_to_word_bank() {
        let verse_objects = vec![
            VerseObject::word("hello", 1, 1),
            VerseObject::text(", "),
            milestone("x", vec![VerseObject::word("world", 1, 1)]),
        ];
        let unmerged = unmerge_with_reference(&verse_objects, &reference(&["x"]));
        assert_eq!(unmerged.word_bank, vec![WordObject::new("hello", 1, 1)]);
        assert_eq!(
            unmerged.alignment,
            vec![Alignment::new(
                vec![WordObject::new("x", 1, 1)],
                vec![WordObject::new("world", 1, 1)]
            )]
        );
    }

    #[test]
    fn test_split_milestone_regrouped() {
        let verse_objects = vec![
            milestone("x", vec![VerseObject::word("a", 1, 1)]),
            VerseObject::word("b", 1, 1),
            milestone("x", vec![VerseObject::word("c", 1, 1)]),
        ];
        let unmerged = unmerge_with_reference(&verse_objects, &reference(&["x"]));
        assert_eq!(unmerged.alignment.len(), 1);
        assert_eq!(unmerged.alignment[0].top_words, vec![WordObject::new("x", 1, 1)]);
        assert_eq!(
            unmerged.alignment[0].bottom_words,
            vec![WordObject::new("a", 1, 1), WordObject::new("c", 1, 1)]
        );
    }

    #[test]
    fn test_nested_milestones_flatten_to_top_words() {
        let verse_objects = vec![milestone(
            "Ἰησοῦ",
            vec![milestone("Χριστοῦ", vec![VerseObject::word("Jesucristo", 1, 1)])],
        )];
        let unmerged = unmerge_with_reference(&verse_objects, &reference(&["Ἰησοῦ", "Χριστοῦ"]));
        assert_eq!(unmerged.alignment.len(), 1);
        assert_eq!(
            unmerged.alignment[0].top_words,
            vec![WordObject::new("Ἰησοῦ", 1, 1), WordObject::new("Χριστοῦ", 1, 1)]
        );
    }

    #[test]
    fn test_empty_milestone_contributes_nothing() {
        let verse_objects = vec![milestone("x", vec![])];
        let unmerged = unmerge_with_reference(&verse_objects, &[]);
        assert!(unmerged.alignment.is_empty());
        assert!(unmerged.word_bank.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let unmerged = Unmerged {
            alignment: vec![],
            word_bank: vec![WordObject::new("a", 1, 1)],
        };
        let value = serde_json::to_value(&unmerged).unwrap();
        assert!(value.get("alignment").is_some());
        assert_eq!(value["wordBank"][0]["word"], "a");
    }

    #[test]
    fn test_word_bank_keeps_verse_order() {
        let verse_objects = vec![
            VerseObject::word("a", 1, 2),
            VerseObject::word("a", 2, 2),
            VerseObject::word("b", 1, 1),
        ];
        let unmerged = unmerge_with_reference(&verse_objects, &[]);
        assert_eq!(
            unmerged.word_bank,
            vec![
                WordObject::new("a", 1, 2),
                WordObject::new("a", 2, 2),
                WordObject::new("b", 1, 1),
            ]
        );
        assert!(unmerged.alignment.is_empty());
    }
}
