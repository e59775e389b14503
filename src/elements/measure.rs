//! Measure markers
//!
//! Carries both the print and the Braille measure number; the Braille one
//! is what gets encoded (number sign plus digits), the print one rides
//! along for diagnostics and the finalization pass.

use serde::Serialize;

use crate::cells::CellSequence;
use crate::elements::number::number_cells;

/// A measure marker on a line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MeasureElement {
    print_measure_number: usize,
    braille_measure_number: usize,
    cells: CellSequence,
}

impl MeasureElement {
    pub fn new(print_measure_number: usize, braille_measure_number: usize) -> Self {
        let cells = number_cells(braille_measure_number, true);
        Self {
            print_measure_number,
            braille_measure_number,
            cells,
        }
    }

    pub fn print_measure_number(&self) -> usize {
        self.print_measure_number
    }

    pub fn braille_measure_number(&self) -> usize {
        self.braille_measure_number
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!(
            "Measure(print {}, braille {})",
            self.print_measure_number, self.braille_measure_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::CellKind;

    #[test]
    fn test_encodes_the_braille_number() {
        let m = MeasureElement::new(12, 3);
        assert_eq!(m.cells().cells(), &[CellKind::Dots3456, CellKind::Dots14]);
        assert_eq!(m.print_measure_number(), 12);
    }
}
