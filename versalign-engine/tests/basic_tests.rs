//! Basic tests for versalign-engine

use versalign_core::MilestoneNode;
use versalign_engine::*;

fn word(text: &str, occurrence: u32, occurrences: u32) -> WordObject {
    WordObject::new(text, occurrence, occurrences)
}

fn top(text: &str, occurrence: u32, occurrences: u32, strong: &str) -> WordObject {
    word(text, occurrence, occurrences)
        .with_attribute("strong", strong)
        .with_attribute("morph", "Gr,N,,,,,GMS,")
}

/// Alignments for "son of David, son of Abraham."
fn matt_1_1b() -> Vec<Alignment> {
    vec![
        Alignment::new(
            vec![top("υἱοῦ", 1, 2, "G52070")],
            vec![word("son", 1, 2), word("of", 1, 2)],
        ),
        Alignment::new(vec![top("Δαυὶδ", 1, 1, "G11380")], vec![word("David", 1, 1)]),
        Alignment::new(
            vec![top("υἱοῦ", 2, 2, "G52070")],
            vec![word("son", 2, 2), word("of", 2, 2)],
        ),
        Alignment::new(vec![top("Ἀβραάμ", 1, 1, "G00110")], vec![word("Abraham", 1, 1)]),
    ]
}

const MATT_1_1B_TARGET: &str = "son of David, son of Abraham.";
const MATT_1_1B_SOURCE: &str = "υἱοῦ Δαυὶδ, υἱοῦ Ἀβραάμ.";

#[test]
fn test_merge_matt_1_1b() {
    let aligner = Aligner::new().unwrap();
    let merged = aligner.merge(&matt_1_1b(), &[], MATT_1_1B_TARGET).unwrap();

    assert_eq!(merged.len(), 6);
    let first = merged[0].as_milestone().unwrap();
    assert_eq!(first.content, "υἱοῦ");
    assert_eq!((first.occurrence, first.occurrences), (1, 2));
    assert_eq!(first.attributes["strong"], "G52070");
    assert_eq!(
        first.children,
        vec![VerseObject::word("son", 1, 2), VerseObject::word("of", 1, 2)]
    );
    assert_eq!(merged[2], VerseObject::text(", "));
    assert_eq!(merged[3].as_milestone().unwrap().occurrence, 2);
    assert_eq!(merged[5], VerseObject::text("."));
}

#[test]
fn test_round_trip_matt_1_1b() {
    let aligner = Aligner::new().unwrap();
    let merged = aligner.merge(&matt_1_1b(), &[], MATT_1_1B_TARGET).unwrap();
    let unmerged = aligner.unmerge(&merged, &ReferenceOrdering::from(MATT_1_1B_SOURCE));

    assert_eq!(unmerged.alignment, matt_1_1b());
    assert!(unmerged.word_bank.is_empty());
}

#[test]
fn test_round_trip_with_word_bank() {
    let aligner = Aligner::new().unwrap();
    let alignments = vec![Alignment::new(
        vec![word("Δαυὶδ", 1, 1)],
        vec![word("David", 1, 1)],
    )];
    let word_bank = vec![word("son", 1, 1), word("of", 1, 1)];
    let merged = aligner.merge(&alignments, &word_bank, "son of David").unwrap();
    assert_eq!(merged[0], VerseObject::word("son", 1, 1));

    let unmerged = aligner.unmerge(&merged, &ReferenceOrdering::from(vec![word("Δαυὶδ", 1, 1)]));
    assert_eq!(unmerged.alignment, alignments);
    assert_eq!(unmerged.word_bank, word_bank);
}

#[test]
fn test_non_contiguous_alignment() {
    let aligner = Aligner::new().unwrap();
    let alignments = vec![Alignment::new(
        vec![word("Βίβλος", 1, 1)],
        vec![word("the", 1, 2), word("genealogy", 1, 1)],
    )];
    let word_bank = vec![word("book", 1, 1), word("of", 1, 1), word("the", 2, 2)];
    let merged = aligner
        .merge(&alignments, &word_bank, "the book of the genealogy")
        .unwrap();

    assert_eq!(merged.len(), 5);
    assert_eq!(
        merged[0].as_milestone().unwrap().children,
        vec![VerseObject::word("the", 1, 2)]
    );
    assert_eq!(merged[3], VerseObject::word("the", 2, 2));
    assert_eq!(
        merged[4].as_milestone().unwrap().children,
        vec![VerseObject::word("genealogy", 1, 1)]
    );

    let unmerged = aligner.unmerge(&merged, &ReferenceOrdering::from("Βίβλος"));
    assert_eq!(unmerged.alignment, alignments);
    assert_eq!(unmerged.word_bank, word_bank);
}

#[test]
fn test_nested_multi_top_word() {
    let aligner = Aligner::new().unwrap();
    let alignments = vec![Alignment::new(
        vec![word("Ἰησοῦ", 1, 1), word("Χριστοῦ", 1, 1)],
        vec![word("Jesus", 1, 1), word("Christ", 1, 1)],
    )];
    let merged = aligner.merge(&alignments, &[], "Jesus Christ,").unwrap();

    let expected = VerseObject::Milestone(MilestoneNode::new("Ἰησοῦ", 1, 1).with_children(vec![
        VerseObject::Milestone(MilestoneNode::new("Χριστοῦ", 1, 1).with_children(vec![
            VerseObject::word("Jesus", 1, 1),
            VerseObject::word("Christ", 1, 1),
        ])),
    ]));
    assert_eq!(merged, vec![expected, VerseObject::text(",")]);

    let unmerged = aligner.unmerge(&merged, &ReferenceOrdering::from("Ἰησοῦ Χριστοῦ,"));
    assert_eq!(unmerged.alignment, alignments);
}

#[test]
fn test_footnote_survives_merge() {
    let aligner = Aligner::new().unwrap();
    let merged = aligner
        .merge(
            &[],
            &[word("amen", 1, 1)],
            "amen \\f some note\\f*",
        )
        .unwrap();
    assert_eq!(
        merged,
        vec![
            VerseObject::word("amen", 1, 1),
            VerseObject::footnote("f", "f*", "some note")
        ]
    );
}

#[test]
fn test_coverage_error() {
    let aligner = Aligner::new().unwrap();
    let err = aligner.merge(&[], &[], "hello world").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Coverage);
    assert!(err.to_string().contains("\"hello, world\""));
}

#[test]
fn test_lookup_error() {
    let aligner = Aligner::new().unwrap();
    let err = aligner
        .merge(&[], &[word("hello", 1, 1), word("hello", 2, 2)], "hello")
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Lookup {
            word: "hello".to_string(),
            occurrence: 2,
            occurrences: 2,
        }
    );
}

#[test]
fn test_structural_error_for_empty_top_words() {
    let aligner = Aligner::new().unwrap();
    let err = aligner
        .merge(&[Alignment::new(vec![], vec![word("hello", 1, 1)])], &[], "hello")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn test_unaligned_source_words_get_empty_alignments() {
    let aligner = Aligner::new().unwrap();
    let verse_objects = vec![VerseObject::Milestone(
        MilestoneNode::new("Δαυὶδ", 1, 1).with_children(vec![VerseObject::word("David", 1, 1)]),
    )];
    let unmerged = aligner.unmerge(&verse_objects, &ReferenceOrdering::from("υἱοῦ Δαυὶδ"));
    assert_eq!(
        unmerged.alignment,
        vec![
            Alignment::new(vec![word("υἱοῦ", 1, 1)], vec![]),
            Alignment::new(vec![word("Δαυὶδ", 1, 1)], vec![word("David", 1, 1)]),
        ]
    );
}

#[test]
fn test_reference_from_source_tree() {
    let aligner = Aligner::new().unwrap();
    let source = aligner.tokenizer().tokenize(MATT_1_1B_SOURCE);
    let merged = aligner.merge(&matt_1_1b(), &[], MATT_1_1B_TARGET).unwrap();
    let unmerged = aligner.unmerge(&merged, &ReferenceOrdering::from(source));
    assert_eq!(unmerged.alignment, matt_1_1b());
}

#[test]
fn test_merged_tree_json_round_trip() {
    let aligner = Aligner::new().unwrap();
    let merged = aligner.merge(&matt_1_1b(), &[], MATT_1_1B_TARGET).unwrap();
    let json = serde_json::to_string(&merged).unwrap();
    let parsed: Vec<VerseObject> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, merged);
}
