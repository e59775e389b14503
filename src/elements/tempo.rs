//! Tempo indication encoding
//!
//! A metronome mark: the beat unit's value cells, the metronome equals
//! cell, then one number, or two numbers around a hyphen cell when the
//! beats-per-minute text is a `min-max` range. The text arrives free-form
//! from the source notation; anything that is neither `digits-digits` nor
//! `digits` alone is a fatal malformed-input error, never a default.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::cells::{CellKind, CellSequence};
use crate::elements::note::{note_value_cells, DiatonicStep, NoteDuration};
use crate::elements::number::number_cells;
use crate::errors::ScoreError;

static BPM_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+)$").unwrap());
static BPM_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)$").unwrap());

/// Parse `"96-104"` or `"120"` into one or two beats-per-minute values.
fn parse_per_minute(source_line: usize, text: &str) -> Result<(usize, Option<usize>), ScoreError> {
    let trimmed = text.trim();
    if let Some(caps) = BPM_RANGE.captures(trimmed) {
        let min = caps[1].parse::<usize>().map_err(|_| malformed(source_line, text))?;
        let max = caps[2].parse::<usize>().map_err(|_| malformed(source_line, text))?;
        return Ok((min, Some(max)));
    }
    if let Some(caps) = BPM_SINGLE.captures(trimmed) {
        let bpm = caps[1].parse::<usize>().map_err(|_| malformed(source_line, text))?;
        return Ok((bpm, None));
    }
    Err(malformed(source_line, text))
}

fn malformed(source_line: usize, text: &str) -> ScoreError {
    ScoreError::MalformedTempoText {
        source_line,
        text: text.to_string(),
    }
}

/// A metronome tempo indication.
///
/// Beat units are rendered with the C-shaped value cells, the metronome
/// convention; augmentation dots of the beat unit follow as dot-3 cells.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TempoElement {
    beat_unit: NoteDuration,
    beat_dot_count: u8,
    per_minute_text: String,
    beats_per_minute: usize,
    beats_per_minute_max: Option<usize>,
    cells: CellSequence,
}

impl TempoElement {
    pub fn new(
        source_line: usize,
        beat_unit: NoteDuration,
        beat_dot_count: u8,
        per_minute_text: &str,
    ) -> Result<Self, ScoreError> {
        let (bpm, bpm_max) = parse_per_minute(source_line, per_minute_text)?;
        log::trace!(
            "tempo at input line {source_line}: {beat_unit:?} = {bpm}{}",
            bpm_max.map(|m| format!("-{m}")).unwrap_or_default()
        );

        let mut cells = CellSequence::new();
        cells.append(&note_value_cells(DiatonicStep::C, beat_unit));
        for _ in 0..beat_dot_count {
            cells.push(CellKind::AUGMENTATION_DOT);
        }
        cells.push(CellKind::METRONOME_EQUALS);
        cells.append(&number_cells(bpm, true));
        if let Some(max) = bpm_max {
            cells.push(CellKind::HYPHEN);
            cells.append(&number_cells(max, true));
        }

        Ok(Self {
            beat_unit,
            beat_dot_count,
            per_minute_text: per_minute_text.to_string(),
            beats_per_minute: bpm,
            beats_per_minute_max: bpm_max,
            cells,
        })
    }

    pub fn beat_unit(&self) -> NoteDuration {
        self.beat_unit
    }

    pub fn beat_dot_count(&self) -> u8 {
        self.beat_dot_count
    }

    pub fn beats_per_minute(&self) -> usize {
        self.beats_per_minute
    }

    pub fn beats_per_minute_max(&self) -> Option<usize> {
        self.beats_per_minute_max
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("Tempo({:?} = {})", self.beat_unit, self.per_minute_text)
    }
}
