//! Key signature encoding
//!
//! One to three alterations repeat the accidental cell; four or more are
//! abbreviated as a signed number followed by one accidental cell. No
//! alterations encode to nothing.

use serde::{Deserialize, Serialize};

use crate::cells::{CellKind, CellSequence};
use crate::elements::number::number_cells;

/// Which accidental the signature stacks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Sharps,
    Flats,
    Naturals,
}

impl KeyKind {
    fn cell(self) -> CellKind {
        match self {
            KeyKind::Sharps => CellKind::SHARP,
            KeyKind::Flats => CellKind::FLAT,
            KeyKind::Naturals => CellKind::NATURAL,
        }
    }
}

/// A key signature: an accidental kind and how many of it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct KeyElement {
    kind: KeyKind,
    alteration_count: usize,
    cells: CellSequence,
}

impl KeyElement {
    pub fn new(kind: KeyKind, alteration_count: usize) -> Self {
        let mut cells = CellSequence::new();
        match alteration_count {
            0 => {}
            1..=3 => {
                for _ in 0..alteration_count {
                    cells.push(kind.cell());
                }
            }
            _ => {
                cells.append(&number_cells(alteration_count, true));
                cells.push(kind.cell());
            }
        }
        Self {
            kind,
            alteration_count,
            cells,
        }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn alteration_count(&self) -> usize {
        self.alteration_count
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Key({} {:?})", self.alteration_count, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sharps_repeat_the_cell() {
        let key = KeyElement::new(KeyKind::Sharps, 2);
        assert_eq!(key.cells().cells(), &[CellKind::Dots146, CellKind::Dots146]);
    }

    #[test]
    fn test_four_flats_abbreviate_with_a_number() {
        let key = KeyElement::new(KeyKind::Flats, 4);
        assert_eq!(
            key.cells().cells(),
            &[CellKind::Dots3456, CellKind::Dots145, CellKind::Dots126]
        );
    }

    #[test]
    fn test_no_alterations_encode_to_nothing() {
        let key = KeyElement::new(KeyKind::Sharps, 0);
        assert!(key.cells().is_empty());
    }
}
