//! Word text and explicit spacing
//!
//! Free text (tempo words, titles, footnotes) in literary cells: letter
//! cells a–z, the capital sign before an upper-case letter, the number sign
//! once per embedded digit run, blank cells for spaces. A character outside
//! that alphabet is a fatal malformed-input error. `SpacesElement` is an
//! explicit run of blank cells.

use serde::Serialize;

use crate::cells::{
    kind::{letter_cells, upper_digit_cell},
    CellKind, CellSequence,
};
use crate::errors::ScoreError;

fn text_cells(source_line: usize, text: &str) -> Result<CellSequence, ScoreError> {
    let mut cells = CellSequence::new();
    let mut in_digit_run = false;
    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            if !in_digit_run {
                cells.push(CellKind::NUMBER_SIGN);
                in_digit_run = true;
            }
            // to_digit(10) only yields 0..=9
            if let Some(cell) = upper_digit_cell(digit as u8) {
                cells.push(cell);
            }
            continue;
        }
        in_digit_run = false;
        if ch == ' ' {
            cells.push(CellKind::BLANK);
        } else if ch.is_ascii_uppercase() {
            cells.push(CellKind::CAPITAL_SIGN);
            if let Some(cell) = letter_cells(ch.to_ascii_lowercase()) {
                cells.push(cell);
            }
        } else if let Some(cell) = letter_cells(ch) {
            cells.push(cell);
        } else {
            return Err(ScoreError::UnencodableCharacter {
                source_line,
                text: text.to_string(),
                character: ch,
            });
        }
    }
    Ok(cells)
}

/// A run of word text.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WordsElement {
    text: String,
    cells: CellSequence,
}

impl WordsElement {
    pub fn new(source_line: usize, text: &str) -> Result<Self, ScoreError> {
        let cells = text_cells(source_line, text)?;
        Ok(Self {
            text: text.to_string(),
            cells,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Words({:?})", self.text)
    }
}

/// An explicit run of blank cells.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SpacesElement {
    count: usize,
    cells: CellSequence,
}

impl SpacesElement {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            cells: CellSequence::blanks(count),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Spaces({})", self.count)
    }
}
