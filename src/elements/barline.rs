//! Barline encoding
//!
//! A regular barline is the blank cell: measures separate on a space. The
//! sectional and final double bars and the dotted/dashed kinds carry their
//! own signs.

use serde::{Deserialize, Serialize};

use crate::cells::{CellKind, CellSequence};

/// The closed set of barline kinds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarlineKind {
    Regular,
    Dotted,
    Dashed,
    SectionalDouble,
    Final,
}

impl BarlineKind {
    fn cells(self) -> CellSequence {
        use CellKind::*;
        match self {
            BarlineKind::Regular => CellSequence::from_cells(&[DotsNone]),
            BarlineKind::Dotted => CellSequence::from_cells(&[Dots3, DotsNone]),
            BarlineKind::Dashed => CellSequence::from_cells(&[Dots36, DotsNone]),
            BarlineKind::SectionalDouble => CellSequence::from_cells(&[Dots126, Dots13, Dots3]),
            BarlineKind::Final => CellSequence::from_cells(&[Dots126, Dots13]),
        }
    }
}

/// One barline.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BarlineElement {
    kind: BarlineKind,
    cells: CellSequence,
}

impl BarlineElement {
    pub fn new(kind: BarlineKind) -> Self {
        Self {
            kind,
            cells: kind.cells(),
        }
    }

    pub fn kind(&self) -> BarlineKind {
        self.kind
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Barline({:?})", self.kind)
    }
}
