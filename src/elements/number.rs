//! Running numbers
//!
//! A non-negative integer rendered as upper-cell digits, optionally led by
//! the number sign. Measure markers, pagination and metronome numbers all
//! reuse the digit run built here.

use serde::Serialize;

use crate::cells::{kind::upper_digit_cell, CellKind, CellSequence};

/// Digit cells of `value`, preceded by the number sign when `sign_needed`.
///
/// Total over all `usize` values: the digit table is closed over 0..=9 and
/// decimal decomposition only ever produces those.
pub(crate) fn number_cells(value: usize, sign_needed: bool) -> CellSequence {
    let mut cells = CellSequence::new();
    if sign_needed {
        cells.push(CellKind::NUMBER_SIGN);
    }
    let digits = value.to_string();
    for ch in digits.chars() {
        let digit = (ch as u8) - b'0';
        // upper_digit_cell is total over 0..=9
        if let Some(cell) = upper_digit_cell(digit) {
            cells.push(cell);
        }
    }
    cells
}

/// A free-standing number on a line (e.g. a running or rehearsal number).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NumberElement {
    value: usize,
    sign_needed: bool,
    cells: CellSequence,
}

impl NumberElement {
    pub fn new(value: usize, sign_needed: bool) -> Self {
        let cells = number_cells(value, sign_needed);
        Self {
            value,
            sign_needed,
            cells,
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn sign_needed(&self) -> bool {
        self.sign_needed
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Number({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_sign() {
        let n = NumberElement::new(96, true);
        assert_eq!(
            n.cells().cells(),
            &[CellKind::Dots3456, CellKind::Dots24, CellKind::Dots124]
        );
    }

    #[test]
    fn test_number_without_sign() {
        let n = NumberElement::new(120, false);
        // digits 1, 2, 0
        assert_eq!(
            n.cells().cells(),
            &[CellKind::Dots1, CellKind::Dots12, CellKind::Dots245]
        );
    }

    #[test]
    fn test_zero_still_emits_one_digit() {
        let n = NumberElement::new(0, true);
        assert_eq!(n.cells().cell_count(), 2);
    }

    #[test]
    fn test_compute_once_determinism() {
        let a = NumberElement::new(104, true);
        let b = NumberElement::new(104, true);
        assert_eq!(a.cells(), b.cells());
    }
}
