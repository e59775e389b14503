//! Encodable musical elements
//!
//! Every musical fact the lowering pass can append is a closed tagged union
//! here: `LineElement` for facts living inside one Braille line,
//! `PageElement` for facts living inside one page. Each concrete kind is
//! constructed with all the musical facts it needs and encodes its
//! `CellSequence` exactly once, at construction; the cached sequence is then
//! read repeatedly during layout measurement.

pub mod barline;
pub mod dynamics;
pub mod key;
pub mod measure;
pub mod note;
pub mod number;
pub mod page;
pub mod policy;
pub mod tempo;
pub mod time;
pub mod words;

pub use barline::{BarlineElement, BarlineKind};
pub use dynamics::{DynamicsElement, DynamicsKind};
pub use key::{KeyElement, KeyKind};
pub use measure::MeasureElement;
pub use note::{Accidental, DiatonicStep, NoteDuration, NoteElement, Octave};
pub use number::NumberElement;
pub use page::{FootNotesElement, MusicHeadingElement, PageHeadingElement, PaginationElement};
pub use tempo::TempoElement;
pub use time::{TimeElement, TimeItem};
pub use words::{SpacesElement, WordsElement};

use serde::Serialize;

use crate::cells::CellSequence;
use crate::layout::line::Line;

/// The closed set of facts encodable inside one Braille line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum LineElementKind {
    Spaces(SpacesElement),
    Barline(BarlineElement),
    Key(KeyElement),
    Time(TimeElement),
    Tempo(TempoElement),
    Note(NoteElement),
    Dynamics(DynamicsElement),
    Number(NumberElement),
    Words(WordsElement),
    Measure(MeasureElement),
}

/// One encodable fact inside a line: a concrete kind plus the attributes
/// every line element carries (originating input line for diagnostics, and
/// a spacing hint consumed by the containing `Line`, never self-applied).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineElement {
    source_line: usize,
    spaces_before: usize,
    kind: LineElementKind,
}

impl LineElement {
    /// Wrap a concrete kind. `source_line` is the originating input line,
    /// kept for diagnostics only; it plays no part in layout.
    pub fn new(source_line: usize, kind: LineElementKind) -> Self {
        Self {
            source_line,
            spaces_before: 0,
            kind,
        }
    }

    /// Request blank cells ahead of this element. The containing `Line`
    /// materializes them on append.
    pub fn with_spaces_before(mut self, spaces: usize) -> Self {
        self.spaces_before = spaces;
        self
    }

    pub fn source_line(&self) -> usize {
        self.source_line
    }

    pub fn spaces_before(&self) -> usize {
        self.spaces_before
    }

    pub fn kind(&self) -> &LineElementKind {
        &self.kind
    }

    /// True for an explicit run of blank cells.
    pub fn is_spaces(&self) -> bool {
        matches!(self.kind, LineElementKind::Spaces(_))
    }

    /// The element's encoded cells, computed once at construction.
    pub fn cells(&self) -> &CellSequence {
        match &self.kind {
            LineElementKind::Spaces(e) => e.cells(),
            LineElementKind::Barline(e) => e.cells(),
            LineElementKind::Key(e) => e.cells(),
            LineElementKind::Time(e) => e.cells(),
            LineElementKind::Tempo(e) => e.cells(),
            LineElementKind::Note(e) => e.cells(),
            LineElementKind::Dynamics(e) => e.cells(),
            LineElementKind::Number(e) => e.cells(),
            LineElementKind::Words(e) => e.cells(),
            LineElementKind::Measure(e) => e.cells(),
        }
    }

    /// Number of encoded cells. O(1).
    pub fn cells_count(&self) -> usize {
        self.cells().cell_count()
    }

    /// One-line human-readable summary for logs.
    pub fn short_text(&self) -> String {
        match &self.kind {
            LineElementKind::Spaces(e) => e.short_text(),
            LineElementKind::Barline(e) => e.short_text(),
            LineElementKind::Key(e) => e.short_text(),
            LineElementKind::Time(e) => e.short_text(),
            LineElementKind::Tempo(e) => e.short_text(),
            LineElementKind::Note(e) => e.short_text(),
            LineElementKind::Dynamics(e) => e.short_text(),
            LineElementKind::Number(e) => e.short_text(),
            LineElementKind::Words(e) => e.short_text(),
            LineElementKind::Measure(e) => e.short_text(),
        }
    }

    /// Field-by-field debug dump, with the cached cells in dot-digit form.
    pub fn debug_text(&self) -> String {
        format!(
            "{:?} @{} spacesBefore={} cells=[{}]",
            self.kind,
            self.source_line,
            self.spaces_before,
            self.cells().as_short_string()
        )
    }

    /// Whether this element asks the containing line for one separating
    /// blank cell before whatever is appended next.
    pub fn requests_trailing_separator(&self) -> bool {
        policy::requests_trailing_separator(&self.kind)
    }
}

/// The closed set of facts encodable inside one page.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum PageElementKind {
    Line(Line),
    Pagination(PaginationElement),
    PageHeading(PageHeadingElement),
    MusicHeading(MusicHeadingElement),
    FootNotes(FootNotesElement),
}

/// One encodable fact inside a page.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PageElement {
    source_line: usize,
    kind: PageElementKind,
}

impl PageElement {
    pub fn new(source_line: usize, kind: PageElementKind) -> Self {
        Self { source_line, kind }
    }

    pub fn source_line(&self) -> usize {
        self.source_line
    }

    pub fn kind(&self) -> &PageElementKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut PageElementKind {
        &mut self.kind
    }

    /// The line inside this element, when it is one.
    pub fn as_line(&self) -> Option<&Line> {
        match &self.kind {
            PageElementKind::Line(line) => Some(line),
            _ => None,
        }
    }

    /// The element's cells. Lines are folded on demand (they mutate during
    /// lowering); the other kinds return their construction-time cache.
    pub fn cells(&self) -> CellSequence {
        match &self.kind {
            PageElementKind::Line(line) => line.cells(),
            PageElementKind::Pagination(e) => e.cells().clone(),
            PageElementKind::PageHeading(e) => e.cells().clone(),
            PageElementKind::MusicHeading(e) => e.cells().clone(),
            PageElementKind::FootNotes(e) => e.cells().clone(),
        }
    }

    /// One-line human-readable summary for logs.
    pub fn short_text(&self) -> String {
        match &self.kind {
            PageElementKind::Line(line) => line.short_text(),
            PageElementKind::Pagination(e) => e.short_text(),
            PageElementKind::PageHeading(e) => e.short_text(),
            PageElementKind::MusicHeading(e) => e.short_text(),
            PageElementKind::FootNotes(e) => e.short_text(),
        }
    }

    /// Field-by-field debug dump, with the element's cells in dot-digit
    /// form.
    pub fn debug_text(&self) -> String {
        format!(
            "{:?} @{} cells=[{}]",
            self.kind,
            self.source_line,
            self.cells().as_short_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NumberingPolicy;

    #[test]
    fn test_page_element_debug_text_dumps_fields_and_cells() {
        let elem = PageElement::new(
            4,
            PageElementKind::Pagination(PaginationElement::new(
                2,
                6,
                NumberingPolicy::BrailleOnly,
            )),
        );
        let text = elem.debug_text();
        assert!(text.contains("Pagination"), "got {text}");
        assert!(text.contains("@4"), "got {text}");
        // number sign then the digit cell for 6
        assert!(text.contains("3456 124"), "got {text}");
    }
}
