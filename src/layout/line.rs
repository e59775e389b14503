//! Lines and their wrap segments
//!
//! A `Line` is an ordered list of `LineContents` segments (the first one is
//! created lazily, tagged Regular; later segments are Continuations used
//! when a measure's content wraps). The line owns the pending-separator
//! state machine that auto-inserts one blank cell between certain adjacent
//! constructs, and the dual print/Braille line numbers.

use serde::Serialize;

use crate::cells::{CellKind, CellSequence};
use crate::elements::number::number_cells;
use crate::elements::{LineElement, LineElementKind, SpacesElement};
use crate::errors::ScoreError;
use crate::options::{NumberingPolicy, RenderOptions};

/// Whether a wrap segment opens a line or continues a wrapped measure.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineContentsKind {
    Regular,
    Continuation,
}

/// The pending-separator state machine: `request` arms it after a
/// construct that wants one trailing blank, `take` consumes it exactly
/// once on the next append.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorState {
    #[default]
    NotPending,
    Pending,
}

impl SeparatorState {
    pub fn request(&mut self) {
        *self = SeparatorState::Pending;
    }

    /// Consume the pending separator, reporting whether one was pending.
    pub fn take(&mut self) -> bool {
        let was_pending = matches!(self, SeparatorState::Pending);
        *self = SeparatorState::NotPending;
        was_pending
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SeparatorState::Pending)
    }
}

/// One wrap segment of a line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineContents {
    kind: LineContentsKind,
    elements: Vec<LineElement>,
}

impl LineContents {
    pub fn new(kind: LineContentsKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> LineContentsKind {
        self.kind
    }

    pub fn elements(&self) -> &[LineElement] {
        &self.elements
    }

    pub fn push(&mut self, element: LineElement) {
        self.elements.push(element);
    }

    /// Insert just ahead of the trailing element. Legal only on a
    /// non-empty segment; on an empty one this is a defect in the caller,
    /// reported with the violating call's file and line.
    #[track_caller]
    pub fn insert_before_last(&mut self, element: LineElement) -> Result<(), ScoreError> {
        if self.elements.is_empty() {
            return Err(ScoreError::misuse(
                "insert_before_last",
                "LineContents",
                format!("segment is empty, cannot place {}", element.short_text()),
            ));
        }
        let at = self.elements.len() - 1;
        self.elements.insert(at, element);
        Ok(())
    }

    /// Sum of the elements' cell counts.
    pub fn cells_count(&self) -> usize {
        self.elements.iter().map(|e| e.cells_count()).sum()
    }

    /// The segment's cells, elements concatenated in order.
    pub fn cells(&self) -> CellSequence {
        let mut cells = CellSequence::new();
        for element in &self.elements {
            cells.append(element.cells());
        }
        cells
    }
}

/// One Braille line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Line {
    print_line_number: usize,
    braille_line_number: usize,
    cells_per_line: usize,
    contents: Vec<LineContents>,
    separator: SeparatorState,
}

impl Line {
    /// Create an empty line. The Braille number starts equal to the print
    /// number; a finalization pass may reassign it later.
    pub fn new(print_line_number: usize, cells_per_line: usize) -> Self {
        Self {
            print_line_number,
            braille_line_number: print_line_number,
            cells_per_line,
            contents: Vec::new(),
            separator: SeparatorState::default(),
        }
    }

    pub fn print_line_number(&self) -> usize {
        self.print_line_number
    }

    pub fn braille_line_number(&self) -> usize {
        self.braille_line_number
    }

    /// Reassign the Braille line number (finalization pass).
    pub fn set_braille_line_number(&mut self, number: usize) {
        self.braille_line_number = number;
    }

    /// Declared cell capacity; this layer never enforces it.
    pub fn cells_per_line(&self) -> usize {
        self.cells_per_line
    }

    pub fn contents(&self) -> &[LineContents] {
        &self.contents
    }

    pub fn contents_count(&self) -> usize {
        self.contents.len()
    }

    /// Append an element to the current (last) segment.
    ///
    /// The first append creates the Regular segment. A pending separator
    /// is consumed first: one `Spaces(1)` element goes in ahead of the
    /// appended element, unless that element spaces itself (an explicit
    /// spaces run, or a non-zero spaces-before hint). The element's
    /// spaces-before hint is materialized here as an explicit spaces run;
    /// the element never self-applies it.
    pub fn append(&mut self, element: LineElement) {
        if self.contents.is_empty() {
            self.contents.push(LineContents::new(LineContentsKind::Regular));
        }
        let pending = self.separator.take();
        let requests = element.requests_trailing_separator();
        // the vec is non-empty here
        if let Some(current) = self.contents.last_mut() {
            if pending && !element.is_spaces() && element.spaces_before() == 0 {
                current.push(LineElement::new(
                    element.source_line(),
                    LineElementKind::Spaces(SpacesElement::new(1)),
                ));
            }
            if element.spaces_before() > 0 {
                current.push(LineElement::new(
                    element.source_line(),
                    LineElementKind::Spaces(SpacesElement::new(element.spaces_before())),
                ));
            }
            log::trace!(
                "line {}: append {}",
                self.print_line_number,
                element.short_text()
            );
            current.push(element);
        }
        if requests {
            self.separator.request();
        }
    }

    /// Open a Continuation segment for wrapped measure content. Any
    /// pending separator dies with the previous segment.
    pub fn start_continuation(&mut self) {
        self.separator.take();
        self.contents
            .push(LineContents::new(LineContentsKind::Continuation));
    }

    /// Splice an element just ahead of the current segment's trailing
    /// element, e.g. a time signature ahead of an already-appended
    /// barline.
    #[track_caller]
    pub fn insert_before_last(&mut self, element: LineElement) -> Result<(), ScoreError> {
        match self.contents.last_mut() {
            Some(current) => current.insert_before_last(element),
            None => Err(ScoreError::misuse(
                "insert_before_last",
                "Line",
                format!(
                    "line {} has no contents, cannot place {}",
                    self.print_line_number,
                    element.short_text()
                ),
            )),
        }
    }

    /// The line-number cells the rendering pass puts alongside this line:
    /// nothing when line numbers are suppressed, otherwise the number(s)
    /// the numbering policy requests, print first when both differ.
    pub fn line_number_cells(&self, options: &RenderOptions) -> CellSequence {
        if options.omit_line_numbers {
            return CellSequence::new();
        }
        match options.numbering {
            NumberingPolicy::BrailleOnly => number_cells(self.braille_line_number, true),
            NumberingPolicy::PrintOnly => number_cells(self.print_line_number, true),
            NumberingPolicy::Both => {
                if self.print_line_number == self.braille_line_number {
                    number_cells(self.braille_line_number, true)
                } else {
                    let mut cells = number_cells(self.print_line_number, true);
                    cells.push(CellKind::BLANK);
                    cells.append(&number_cells(self.braille_line_number, true));
                    cells
                }
            }
        }
    }

    /// Total cell count: a fold over every element of every segment,
    /// recomputed on demand since lines mutate during lowering.
    pub fn cells_count(&self) -> usize {
        self.contents.iter().map(|c| c.cells_count()).sum()
    }

    /// The line's cells, segments concatenated in order.
    pub fn cells(&self) -> CellSequence {
        let mut cells = CellSequence::new();
        for contents in &self.contents {
            cells.append(&contents.cells());
        }
        cells
    }

    pub fn short_text(&self) -> String {
        format!(
            "Line(print {}, braille {}, {} segment(s), {} cell(s))",
            self.print_line_number,
            self.braille_line_number,
            self.contents.len(),
            self.cells_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{
        BarlineElement, BarlineKind, KeyElement, KeyKind, NoteElement, TimeElement, TimeItem,
    };
    use crate::elements::note::{DiatonicStep, NoteDuration, Octave};

    fn key_element() -> LineElement {
        LineElement::new(1, LineElementKind::Key(KeyElement::new(KeyKind::Sharps, 2)))
    }

    fn note_element() -> LineElement {
        LineElement::new(
            1,
            LineElementKind::Note(NoteElement::new(
                DiatonicStep::C,
                NoteDuration::Quarter,
                0,
                Octave::Fourth,
                true,
                None,
            )),
        )
    }

    #[test]
    fn test_separator_state_machine() {
        let mut state = SeparatorState::default();
        assert!(!state.take());
        state.request();
        assert!(state.is_pending());
        assert!(state.take());
        // consumed exactly once
        assert!(!state.take());
    }

    #[test]
    fn test_first_append_creates_regular_segment() {
        let mut line = Line::new(1, 40);
        assert_eq!(line.contents_count(), 0);
        line.append(note_element());
        assert_eq!(line.contents_count(), 1);
        assert_eq!(line.contents()[0].kind(), LineContentsKind::Regular);
    }

    #[test]
    fn test_key_then_note_auto_inserts_one_space() {
        let mut line = Line::new(1, 40);
        line.append(key_element());
        line.append(note_element());
        let elements = line.contents()[0].elements();
        assert_eq!(elements.len(), 3);
        assert!(matches!(elements[0].kind(), LineElementKind::Key(_)));
        assert!(matches!(
            elements[1].kind(),
            LineElementKind::Spaces(s) if s.count() == 1
        ));
        assert!(matches!(elements[2].kind(), LineElementKind::Note(_)));
    }

    #[test]
    fn test_pending_separator_is_consumed_once() {
        let mut line = Line::new(1, 40);
        line.append(key_element());
        line.append(note_element());
        line.append(note_element());
        // key, auto space, note, note: no second space
        assert_eq!(line.contents()[0].elements().len(), 4);
    }

    #[test]
    fn test_explicit_spaces_satisfy_the_pending_separator() {
        let mut line = Line::new(1, 40);
        line.append(key_element());
        line.append(LineElement::new(
            1,
            LineElementKind::Spaces(SpacesElement::new(2)),
        ));
        line.append(note_element());
        // key, explicit spaces, note: the pending flag must not double up
        assert_eq!(line.contents()[0].elements().len(), 3);
    }

    #[test]
    fn test_spaces_before_hint_is_materialized_by_the_line() {
        let mut line = Line::new(1, 40);
        line.append(note_element().with_spaces_before(2));
        let elements = line.contents()[0].elements();
        assert_eq!(elements.len(), 2);
        assert!(matches!(
            elements[0].kind(),
            LineElementKind::Spaces(s) if s.count() == 2
        ));
    }

    #[test]
    fn test_cells_count_is_the_fold_over_all_segments() {
        let mut line = Line::new(1, 40);
        line.append(key_element());
        line.append(note_element());
        line.start_continuation();
        line.append(note_element());
        let expected: usize = line
            .contents()
            .iter()
            .flat_map(|c| c.elements())
            .map(|e| e.cells_count())
            .sum();
        assert_eq!(line.cells_count(), expected);
        assert_eq!(line.cells().cell_count(), expected);
    }

    #[test]
    fn test_insert_before_last_on_empty_line_is_a_misuse_error() {
        let mut line = Line::new(1, 40);
        let err = line.insert_before_last(note_element()).unwrap_err();
        assert!(matches!(err, ScoreError::StructuralMisuse { .. }));
    }

    #[test]
    fn test_insert_before_last_on_singleton_prepends() {
        let mut line = Line::new(1, 40);
        line.append(LineElement::new(
            1,
            LineElementKind::Barline(BarlineElement::new(BarlineKind::Regular)),
        ));
        let time = LineElement::new(
            1,
            LineElementKind::Time(TimeElement::new(vec![TimeItem::new(4, 4)])),
        );
        line.insert_before_last(time).unwrap();
        let elements = line.contents()[0].elements();
        assert_eq!(elements.len(), 2);
        assert!(matches!(elements[0].kind(), LineElementKind::Time(_)));
        assert!(matches!(elements[1].kind(), LineElementKind::Barline(_)));
    }

    #[test]
    fn test_braille_line_number_starts_equal_then_reassigns() {
        let mut line = Line::new(6, 40);
        assert_eq!(line.braille_line_number(), 6);
        line.set_braille_line_number(4);
        assert_eq!(line.braille_line_number(), 4);
        assert_eq!(line.print_line_number(), 6);
    }

    #[test]
    fn test_line_number_cells_follow_options() {
        let mut line = Line::new(6, 40);
        line.set_braille_line_number(4);

        let mut options = RenderOptions::default();
        assert_eq!(
            line.line_number_cells(&options),
            number_cells(4, true),
            "BrailleOnly reflects the reassigned Braille number"
        );

        options.numbering = NumberingPolicy::PrintOnly;
        assert_eq!(line.line_number_cells(&options), number_cells(6, true));

        options.numbering = NumberingPolicy::Both;
        assert_eq!(
            line.line_number_cells(&options).cell_count(),
            number_cells(6, true).cell_count() + 1 + number_cells(4, true).cell_count()
        );

        options.omit_line_numbers = true;
        assert!(line.line_number_cells(&options).is_empty());
    }

    #[test]
    fn test_continuation_drops_pending_separator() {
        let mut line = Line::new(1, 40);
        line.append(key_element());
        line.start_continuation();
        line.append(note_element());
        // no auto space at the head of the continuation
        assert_eq!(line.contents()[1].elements().len(), 1);
    }
}
