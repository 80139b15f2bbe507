//! Word-list helpers over verse-object trees

use crate::types::{NodeKind, VerseObject, WordObject};

/// Flatten every node that has children into its leaf descendants
pub fn words_from_verse_objects(verse_objects: &[VerseObject]) -> Vec<VerseObject> {
    let mut leaves = Vec::new();
    collect_leaves(verse_objects, &mut leaves);
    leaves
}

fn collect_leaves(verse_objects: &[VerseObject], leaves: &mut Vec<VerseObject>) {
    for verse_object in verse_objects {
        match verse_object.children() {
            Some(children) => collect_leaves(children, leaves),
            None => leaves.push(verse_object.clone()),
        }
    }
}

/// Word nodes in document order, descending into milestones
pub fn word_list(verse_objects: &[VerseObject]) -> Vec<VerseObject> {
    let mut words = Vec::new();
    for verse_object in verse_objects {
        extract_words(verse_object, &mut words);
    }
    words
}

fn extract_words(verse_object: &VerseObject, words: &mut Vec<VerseObject>) {
    let mut found = Vec::new();
    word_refs(verse_object, &mut found);
    words.extend(found.into_iter().cloned());
}

fn word_refs<'a>(verse_object: &'a VerseObject, words: &mut Vec<&'a VerseObject>) {
    match verse_object {
        VerseObject::Word(_) => words.push(verse_object),
        VerseObject::Milestone(milestone) => {
            for child in &milestone.children {
                word_refs(child, words);
            }
        }
        VerseObject::Text(_) | VerseObject::Footnote(_) => {}
    }
}

/// Render verse objects to a space-joined string.
///
/// Milestones render as the words they contain. With a filter, only nodes of
/// the listed kinds are rendered. No space is inserted after a newline.
pub fn merge_verse_data(verse_objects: &[VerseObject], filter: Option<&[NodeKind]>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in verse_objects {
        let mut candidates = Vec::new();
        match part {
            VerseObject::Milestone(_) => word_refs(part, &mut candidates),
            _ => candidates.push(part),
        }
        for candidate in candidates {
            if filter.is_some_and(|kinds| !kinds.contains(&candidate.kind())) {
                continue;
            }
            if let Some(text) = candidate.text_content() {
                parts.push(text);
            }
        }
    }

    let mut verse_text = String::new();
    for part in parts.into_iter().filter(|part| !part.is_empty()) {
        if !verse_text.is_empty() && !verse_text.ends_with('\n') {
            verse_text.push(' ');
        }
        verse_text.push_str(part);
    }
    verse_text
}

/// Stable-sort word records by the position of their identity in `reference`.
///
/// Records whose identity is absent from the reference sort first.
pub fn sort_word_objects(word_objects: &[WordObject], reference: &[WordObject]) -> Vec<WordObject> {
    let mut keyed: Vec<(Option<usize>, &WordObject)> = word_objects
        .iter()
        .map(|word| {
            let position = reference.iter().position(|candidate| {
                candidate.word == word.word
                    && candidate.occurrence == word.occurrence
                    && candidate.occurrences == word.occurrences
            });
            (position, word)
        })
        .collect();
    keyed.sort_by_key(|(position, _)| *position);
    keyed.into_iter().map(|(_, word)| word.clone()).collect()
}
