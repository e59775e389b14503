//! Note encoding
//!
//! A note composes, in order: accidental cells, value cells, octave cells
//! when the caller asked for them, then one dot-3 cell per augmentation
//! dot. The `octave_needed` flag is supplied by the lowering pass, which
//! compares registers across successive notes; this encoder holds no
//! cross-note memory and does no defaulting of its own.

use serde::{Deserialize, Serialize};

use crate::cells::{CellKind, CellSequence};

/// Diatonic letter of a note.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiatonicStep {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Note value. Braille reuses four cell shapes across the value range:
/// whole shapes also mean 16ths, half shapes 32nds, quarter shapes 64ths
/// and eighth shapes 128ths; context disambiguates for the reader.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteDuration {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
}

/// Braille octave, middle C starting the fourth.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Octave {
    BelowFirst,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    AboveSeventh,
}

/// Accidental preceding the note value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accidental {
    Sharp,
    Flat,
    Natural,
    DoubleSharp,
    DoubleFlat,
}

/// The four cell shapes a duration maps onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueShape {
    Eighth,
    Quarter,
    Half,
    Whole,
}

impl NoteDuration {
    fn shape(self) -> ValueShape {
        match self {
            NoteDuration::Eighth | NoteDuration::HundredTwentyEighth => ValueShape::Eighth,
            NoteDuration::Quarter | NoteDuration::SixtyFourth => ValueShape::Quarter,
            NoteDuration::Half | NoteDuration::ThirtySecond => ValueShape::Half,
            NoteDuration::Whole | NoteDuration::Sixteenth => ValueShape::Whole,
        }
    }
}

/// The value cell for a step in one of the four shapes.
fn value_cell(step: DiatonicStep, shape: ValueShape) -> CellKind {
    use CellKind::*;
    use DiatonicStep::*;
    match shape {
        ValueShape::Eighth => match step {
            C => Dots145,
            D => Dots15,
            E => Dots124,
            F => Dots1245,
            G => Dots125,
            A => Dots24,
            B => Dots245,
        },
        // quarter shapes add dot 6 to the eighth shape
        ValueShape::Quarter => match step {
            C => Dots1456,
            D => Dots156,
            E => Dots1246,
            F => Dots12456,
            G => Dots1256,
            A => Dots246,
            B => Dots2456,
        },
        // half shapes add dot 3
        ValueShape::Half => match step {
            C => Dots1345,
            D => Dots135,
            E => Dots1234,
            F => Dots12345,
            G => Dots1235,
            A => Dots234,
            B => Dots2345,
        },
        // whole shapes add dots 3 and 6
        ValueShape::Whole => match step {
            C => Dots13456,
            D => Dots1356,
            E => Dots12346,
            F => Dots123456,
            G => Dots12356,
            A => Dots2346,
            B => Dots23456,
        },
    }
}

/// Value cells for a beat unit or note value: the shaped cell for the step.
pub(crate) fn note_value_cells(step: DiatonicStep, duration: NoteDuration) -> CellSequence {
    CellSequence::from_cells(&[value_cell(step, duration.shape())])
}

/// Octave-mark cells. Octaves one through seven are single marks; the
/// registers beyond double the outer mark.
pub(crate) fn octave_cells(octave: Octave) -> CellSequence {
    use CellKind::*;
    match octave {
        Octave::BelowFirst => CellSequence::from_cells(&[Dots4, Dots4]),
        Octave::First => CellSequence::from_cells(&[Dots4]),
        Octave::Second => CellSequence::from_cells(&[Dots45]),
        Octave::Third => CellSequence::from_cells(&[Dots456]),
        Octave::Fourth => CellSequence::from_cells(&[Dots5]),
        Octave::Fifth => CellSequence::from_cells(&[Dots46]),
        Octave::Sixth => CellSequence::from_cells(&[Dots56]),
        Octave::Seventh => CellSequence::from_cells(&[Dots6]),
        Octave::AboveSeventh => CellSequence::from_cells(&[Dots6, Dots6]),
    }
}

/// Accidental cells; the double variants repeat the single cell.
pub(crate) fn accidental_cells(accidental: Accidental) -> CellSequence {
    use CellKind::*;
    match accidental {
        Accidental::Sharp => CellSequence::from_cells(&[Dots146]),
        Accidental::Flat => CellSequence::from_cells(&[Dots126]),
        Accidental::Natural => CellSequence::from_cells(&[Dots16]),
        Accidental::DoubleSharp => CellSequence::from_cells(&[Dots146, Dots146]),
        Accidental::DoubleFlat => CellSequence::from_cells(&[Dots126, Dots126]),
    }
}

/// One note, fully resolved by the lowering pass.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NoteElement {
    step: DiatonicStep,
    duration: NoteDuration,
    dot_count: u8,
    octave: Octave,
    octave_needed: bool,
    accidental: Option<Accidental>,
    cells: CellSequence,
}

impl NoteElement {
    pub fn new(
        step: DiatonicStep,
        duration: NoteDuration,
        dot_count: u8,
        octave: Octave,
        octave_needed: bool,
        accidental: Option<Accidental>,
    ) -> Self {
        let mut cells = CellSequence::new();
        if let Some(acc) = accidental {
            cells.append(&accidental_cells(acc));
        }
        cells.append(&note_value_cells(step, duration));
        if octave_needed {
            cells.append(&octave_cells(octave));
        }
        for _ in 0..dot_count {
            cells.push(CellKind::AUGMENTATION_DOT);
        }
        Self {
            step,
            duration,
            dot_count,
            octave,
            octave_needed,
            accidental,
            cells,
        }
    }

    pub fn step(&self) -> DiatonicStep {
        self.step
    }

    pub fn duration(&self) -> NoteDuration {
        self.duration
    }

    pub fn dot_count(&self) -> u8 {
        self.dot_count
    }

    pub fn octave(&self) -> Octave {
        self.octave
    }

    pub fn octave_needed(&self) -> bool {
        self.octave_needed
    }

    pub fn accidental(&self) -> Option<Accidental> {
        self.accidental
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!(
            "Note({:?} {:?}{}{})",
            self.step,
            self.duration,
            ".".repeat(self.dot_count as usize),
            if self.octave_needed {
                format!(" {:?}", self.octave)
            } else {
                String::new()
            }
        )
    }
}
