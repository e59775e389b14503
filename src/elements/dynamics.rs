//! Dynamics encoding
//!
//! A dynamic mark is the word sign followed by the letter cells of its
//! abbreviation. The kind set is closed; every kind has a mapping.

use serde::{Deserialize, Serialize};

use crate::cells::{kind::letter_cells, CellKind, CellSequence};

/// The closed set of dynamic marks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DynamicsKind {
    PPP,
    PP,
    P,
    MP,
    MF,
    F,
    FF,
    FFF,
    SF,
    SFZ,
    RF,
    FP,
}

impl DynamicsKind {
    /// The printed abbreviation, lower case.
    pub fn letters(self) -> &'static str {
        match self {
            DynamicsKind::PPP => "ppp",
            DynamicsKind::PP => "pp",
            DynamicsKind::P => "p",
            DynamicsKind::MP => "mp",
            DynamicsKind::MF => "mf",
            DynamicsKind::F => "f",
            DynamicsKind::FF => "ff",
            DynamicsKind::FFF => "fff",
            DynamicsKind::SF => "sf",
            DynamicsKind::SFZ => "sfz",
            DynamicsKind::RF => "rf",
            DynamicsKind::FP => "fp",
        }
    }
}

/// One dynamic mark.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DynamicsElement {
    kind: DynamicsKind,
    cells: CellSequence,
}

impl DynamicsElement {
    pub fn new(kind: DynamicsKind) -> Self {
        let mut cells = CellSequence::new();
        cells.push(CellKind::WORD_SIGN);
        for letter in kind.letters().chars() {
            // the abbreviation alphabet is a subset of a-z
            if let Some(cell) = letter_cells(letter) {
                cells.push(cell);
            }
        }
        Self { kind, cells }
    }

    pub fn kind(&self) -> DynamicsKind {
        self.kind
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Dynamics({})", self.kind.letters())
    }
}
