//! Ordered, concatenable runs of Braille cells
//!
//! A `CellSequence` is built incrementally while an element encodes itself,
//! then read repeatedly during layout measurement. Appends never fail and
//! the cell count of a concatenation equals the sum of the parts' counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::CellKind;

/// The codec's output unit: an ordered run of cells.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSequence {
    cells: Vec<CellKind>,
}

impl CellSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a sequence from a fixed run of cells.
    pub fn from_cells(cells: &[CellKind]) -> Self {
        Self {
            cells: cells.to_vec(),
        }
    }

    /// A sequence of `count` blank cells.
    pub fn blanks(count: usize) -> Self {
        Self {
            cells: vec![CellKind::BLANK; count],
        }
    }

    /// Append one cell. Never fails: the alphabet is closed and total.
    pub fn push(&mut self, kind: CellKind) {
        self.cells.push(kind);
    }

    /// Append a whole sequence after this one's cells.
    pub fn append(&mut self, other: &CellSequence) {
        self.cells.extend_from_slice(&other.cells);
    }

    /// Number of cells. O(1).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True when the sequence holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in order.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Iterate the cells in order.
    pub fn iter(&self) -> impl Iterator<Item = CellKind> + '_ {
        self.cells.iter().copied()
    }

    /// Compact dot-digit form for logs and tests, cells separated by one
    /// space: `"3456 24 124"`. Never used as an output encoding.
    pub fn as_short_string(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.as_short_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Field-by-field debug form: variant names and the cell count.
    pub fn as_debug_string(&self) -> String {
        let names = self
            .cells
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CellSequence[{}]({names})", self.cell_count())
    }
}

impl fmt::Display for CellSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_short_string())
    }
}

impl FromIterator<CellKind> for CellSequence {
    fn from_iter<I: IntoIterator<Item = CellKind>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<CellKind> for CellSequence {
    fn extend<I: IntoIterator<Item = CellKind>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_count_homomorphism() {
        let mut a = CellSequence::from_cells(&[CellKind::Dots1, CellKind::Dots12]);
        let b = CellSequence::from_cells(&[CellKind::Dots14]);
        let (na, nb) = (a.cell_count(), b.cell_count());
        a.append(&b);
        assert_eq!(a.cell_count(), na + nb);
        assert_eq!(
            a.cells(),
            &[CellKind::Dots1, CellKind::Dots12, CellKind::Dots14]
        );
    }

    #[test]
    fn test_append_empty_is_identity() {
        let mut a = CellSequence::from_cells(&[CellKind::Dots145]);
        let before = a.clone();
        a.append(&CellSequence::new());
        assert_eq!(a, before);

        let mut empty = CellSequence::new();
        empty.append(&before);
        assert_eq!(empty, before);
    }

    #[test]
    fn test_blanks_count() {
        let s = CellSequence::blanks(3);
        assert_eq!(s.cell_count(), 3);
        assert!(s.iter().all(|c| c.is_blank()));
    }

    #[test]
    fn test_short_string_joins_cells() {
        let s = CellSequence::from_cells(&[CellKind::Dots3456, CellKind::Dots24]);
        assert_eq!(s.as_short_string(), "3456 24");
    }
}
