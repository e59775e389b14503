//! Time signature encoding
//!
//! Each signature item is the number sign, the beat count in upper-cell
//! digits, then the beat value in lower-cell digits. A compound signature
//! concatenates its items in order.

use serde::{Deserialize, Serialize};

use crate::cells::{
    kind::{lower_digit_cell, upper_digit_cell},
    CellKind, CellSequence,
};

/// One `beats / beat-value` pair of a time signature.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeItem {
    pub beats: u16,
    pub beat_value: u16,
}

impl TimeItem {
    pub fn new(beats: u16, beat_value: u16) -> Self {
        Self { beats, beat_value }
    }

    fn cells(&self) -> CellSequence {
        let mut cells = CellSequence::new();
        cells.push(CellKind::NUMBER_SIGN);
        for ch in self.beats.to_string().chars() {
            if let Some(cell) = upper_digit_cell((ch as u8) - b'0') {
                cells.push(cell);
            }
        }
        for ch in self.beat_value.to_string().chars() {
            if let Some(cell) = lower_digit_cell((ch as u8) - b'0') {
                cells.push(cell);
            }
        }
        cells
    }
}

/// A time signature: one or more items.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimeElement {
    items: Vec<TimeItem>,
    cells: CellSequence,
}

impl TimeElement {
    pub fn new(items: Vec<TimeItem>) -> Self {
        let mut cells = CellSequence::new();
        for item in &items {
            cells.append(&item.cells());
        }
        Self { items, cells }
    }

    pub fn items(&self) -> &[TimeItem] {
        &self.items
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|i| format!("{}/{}", i.beats, i.beat_value))
            .collect::<Vec<_>>()
            .join("+");
        format!("Time({items})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_time() {
        let time = TimeElement::new(vec![TimeItem::new(4, 4)]);
        // number sign, upper 4, lower 4
        assert_eq!(
            time.cells().cells(),
            &[CellKind::Dots3456, CellKind::Dots145, CellKind::Dots256]
        );
    }

    #[test]
    fn test_twelve_eight_uses_two_upper_digits() {
        let time = TimeElement::new(vec![TimeItem::new(12, 8)]);
        assert_eq!(
            time.cells().cells(),
            &[
                CellKind::Dots3456,
                CellKind::Dots1,
                CellKind::Dots12,
                CellKind::Dots236,
            ]
        );
    }

    #[test]
    fn test_compound_signature_concatenates_items() {
        let time = TimeElement::new(vec![TimeItem::new(3, 4), TimeItem::new(2, 4)]);
        let first = TimeElement::new(vec![TimeItem::new(3, 4)]);
        let second = TimeElement::new(vec![TimeItem::new(2, 4)]);
        assert_eq!(
            time.cells().cell_count(),
            first.cells().cell_count() + second.cells().cell_count()
        );
    }
}
