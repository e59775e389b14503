// Cell sequence codec properties

use pretty_assertions::assert_eq;

use braille_score::cells::{CellKind, CellSequence};

fn arbitrary_sequences() -> Vec<CellSequence> {
    vec![
        CellSequence::new(),
        CellSequence::from_cells(&[CellKind::Dots1]),
        CellSequence::from_cells(&[CellKind::Dots3456, CellKind::Dots24, CellKind::Dots124]),
        CellSequence::blanks(4),
        CellKind::ALL.iter().copied().collect(),
    ]
}

#[test]
fn test_concatenation_homomorphism_over_arbitrary_pairs() {
    for a in arbitrary_sequences() {
        for b in arbitrary_sequences() {
            let mut joined = a.clone();
            joined.append(&b);
            assert_eq!(joined.cell_count(), a.cell_count() + b.cell_count());

            let expected: Vec<CellKind> = a.iter().chain(b.iter()).collect();
            assert_eq!(joined.cells(), expected.as_slice());
        }
    }
}

#[test]
fn test_append_is_associative() {
    let seqs = arbitrary_sequences();
    let (a, b, c) = (&seqs[1], &seqs[2], &seqs[3]);

    let mut left = a.clone();
    left.append(b);
    left.append(c);

    let mut bc = b.clone();
    bc.append(c);
    let mut right = a.clone();
    right.append(&bc);

    assert_eq!(left, right);
}

#[test]
fn test_single_cell_push_matches_sequence_append() {
    let mut pushed = CellSequence::new();
    pushed.push(CellKind::Dots145);
    pushed.push(CellKind::Dots3);

    let mut appended = CellSequence::new();
    appended.append(&CellSequence::from_cells(&[CellKind::Dots145]));
    appended.append(&CellSequence::from_cells(&[CellKind::Dots3]));

    assert_eq!(pushed, appended);
}

#[test]
fn test_short_and_debug_strings_are_log_forms_only() {
    let seq = CellSequence::from_cells(&[CellKind::Dots3456, CellKind::DotsNone, CellKind::Dots1]);
    assert_eq!(seq.as_short_string(), "3456 . 1");
    let debug = seq.as_debug_string();
    assert!(debug.starts_with("CellSequence[3]"));
    assert!(debug.contains("Dots3456"));
    assert!(debug.contains("DotsNone"));
}

#[test]
fn test_the_alphabet_is_closed_over_all_masks() {
    assert_eq!(CellKind::ALL.len(), 64);
    for (mask, kind) in CellKind::ALL.iter().enumerate() {
        assert_eq!(kind.dots_mask() as usize, mask);
    }
}
