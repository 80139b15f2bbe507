//! Merge engine
//!
//! Rebuilds an ordered verse-object tree from alignments, the word bank and
//! the tokenized verse text. Positions are located by word identity in the
//! reference stream, alignment spans are grouped into consecutive runs and
//! each run is replaced by one nested milestone.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use std::collections::{BTreeMap, HashSet};
use versalign_core::{group_consecutive, nest, Alignment, VerseObject, WordObject};

/// Merge alignment data into the already tokenized `reference` stream.
///
/// Fails if any word of the reference is unaccounted for, if any word of the
/// alignment data is missing from the reference, or if the data is malformed.
pub fn merge_into_reference(
    reference: &[VerseObject],
    alignments: &[Alignment],
    word_bank: &[WordObject],
    config: &EngineConfig,
) -> Result<Vec<VerseObject>> {
    check_coverage(reference, alignments, word_bank)?;

    let mut output = reference.to_vec();
    let mut claimed = HashSet::new();

    for bottom_word in word_bank {
        let index = locate(reference, bottom_word)?;
        claim(&mut claimed, index, bottom_word)?;
        output[index] = VerseObject::Word(bottom_word.to_word_node(&config.word_tag));
    }

    let mut to_delete = HashSet::new();
    for (alignment_index, alignment) in alignments.iter().enumerate() {
        if alignment.bottom_words.is_empty() {
            continue;
        }
        if alignment.top_words.is_empty() {
            return Err(EngineError::structural(format!(
                "alignment {alignment_index} has bottom words but no top words"
            )));
        }

        let mut replacements = BTreeMap::new();
        for bottom_word in &alignment.bottom_words {
            let index = locate(reference, bottom_word)?;
            claim(&mut claimed, index, bottom_word)?;
            replacements.insert(
                index,
                VerseObject::Word(bottom_word.to_word_node(&config.word_tag)),
            );
        }

        let mut milestones = Vec::with_capacity(alignment.top_words.len());
        for top_word in &alignment.top_words {
            top_word.validate()?;
            milestones.push(top_word.to_milestone(&config.milestone_tag));
        }

        let indices: Vec<usize> = replacements.keys().copied().collect();
        let runs = group_consecutive(&indices);
        tracing::trace!(
            alignment = alignment_index,
            runs = runs.len(),
            "merge: placing alignment"
        );
        for run in runs {
            let mut run_milestones = milestones.clone();
            if let Some(innermost) = run_milestones.last_mut() {
                innermost.children = run
                    .iter()
                    .filter_map(|index| replacements.get(index).cloned())
                    .collect();
            }
            let nested = nest(&run_milestones)?;
            output[run[0]] = VerseObject::Milestone(nested);
            to_delete.extend(run.into_iter().skip(1));
        }
    }

    tracing::debug!(
        tokens = reference.len(),
        alignments = alignments.len(),
        word_bank = word_bank.len(),
        collapsed = to_delete.len(),
        "merge: rebuilt verse tree"
    );

    Ok(output
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !to_delete.contains(index))
        .map(|(_, verse_object)| verse_object)
        .collect())
}

/// Every word node of the reference must appear in the word bank or in some
/// alignment's bottom words.
fn check_coverage(
    reference: &[VerseObject],
    alignments: &[Alignment],
    word_bank: &[WordObject],
) -> Result<()> {
    let missing: Vec<String> = reference
        .iter()
        .filter_map(VerseObject::as_word)
        .filter(|node| {
            let in_bank = word_bank.iter().any(|word| word.matches_node(node));
            let in_alignments = alignments.iter().any(|alignment| {
                alignment
                    .bottom_words
                    .iter()
                    .any(|word| word.matches_node(node))
            });
            !in_bank && !in_alignments
        })
        .map(|node| node.text.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Coverage { words: missing })
    }
}

fn locate(reference: &[VerseObject], word: &WordObject) -> Result<usize> {
    word.validate()?;
    reference
        .iter()
        .position(|verse_object| {
            verse_object
                .as_word()
                .is_some_and(|node| word.matches_node(node))
        })
        .ok_or_else(|| EngineError::Lookup {
            word: word.word.clone(),
            occurrence: word.occurrence,
            occurrences: word.occurrences,
        })
}

fn claim(claimed: &mut HashSet<usize>, index: usize, word: &WordObject) -> Result<()> {
    if claimed.insert(index) {
        Ok(())
    } else {
        Err(EngineError::structural(format!(
            "word \"{}\" ({} of {}) is placed more than once",
            word.word, word.occurrence, word.occurrences
        )))
    }
}
