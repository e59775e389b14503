//! Page-scoped elements
//!
//! Pagination marks, page headings, the music heading (the specialised
//! first line carrying the initial tempo, key and time), and footnotes.

use serde::Serialize;

use crate::cells::{CellKind, CellSequence};
use crate::elements::key::KeyElement;
use crate::elements::number::number_cells;
use crate::elements::tempo::TempoElement;
use crate::elements::time::TimeElement;
use crate::elements::words::WordsElement;
use crate::options::NumberingPolicy;

/// A pagination mark carrying both numbering schemes.
///
/// Which number(s) the cells show follows the numbering policy; when both
/// are requested and differ, print comes first, then one blank, then the
/// Braille number.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PaginationElement {
    print_page_number: usize,
    braille_page_number: usize,
    policy: NumberingPolicy,
    cells: CellSequence,
}

fn pagination_cells(print: usize, braille: usize, policy: NumberingPolicy) -> CellSequence {
    match policy {
        NumberingPolicy::BrailleOnly => number_cells(braille, true),
        NumberingPolicy::PrintOnly => number_cells(print, true),
        NumberingPolicy::Both => {
            if print == braille {
                number_cells(braille, true)
            } else {
                let mut cells = number_cells(print, true);
                cells.push(CellKind::BLANK);
                cells.append(&number_cells(braille, true));
                cells
            }
        }
    }
}

impl PaginationElement {
    pub fn new(
        print_page_number: usize,
        braille_page_number: usize,
        policy: NumberingPolicy,
    ) -> Self {
        let cells = pagination_cells(print_page_number, braille_page_number, policy);
        Self {
            print_page_number,
            braille_page_number,
            policy,
            cells,
        }
    }

    /// Rewrite the numbers and re-encode. Called by the finalization pass
    /// when it reassigns a page's Braille number.
    pub fn renumber(&mut self, print_page_number: usize, braille_page_number: usize) {
        self.print_page_number = print_page_number;
        self.braille_page_number = braille_page_number;
        self.cells = pagination_cells(print_page_number, braille_page_number, self.policy);
    }

    pub fn print_page_number(&self) -> usize {
        self.print_page_number
    }

    pub fn braille_page_number(&self) -> usize {
        self.braille_page_number
    }

    pub fn policy(&self) -> NumberingPolicy {
        self.policy
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!(
            "Pagination(print {}, braille {})",
            self.print_page_number, self.braille_page_number
        )
    }
}

/// A page heading: free text plus the page's pagination cells.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PageHeadingElement {
    title: WordsElement,
    pagination: PaginationElement,
    cells: CellSequence,
}

impl PageHeadingElement {
    pub fn new(title: WordsElement, pagination: PaginationElement) -> Self {
        let mut cells = CellSequence::new();
        cells.append(title.cells());
        cells.push(CellKind::BLANK);
        cells.append(pagination.cells());
        Self {
            title,
            pagination,
            cells,
        }
    }

    pub fn title(&self) -> &WordsElement {
        &self.title
    }

    pub fn pagination(&self) -> &PaginationElement {
        &self.pagination
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("PageHeading({:?})", self.title.text())
    }
}

/// The music heading: the page's initial tempo, key and time, in that
/// order, one blank cell between the parts that are present.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MusicHeadingElement {
    tempo: Option<TempoElement>,
    key: Option<KeyElement>,
    time: Option<TimeElement>,
    cells: CellSequence,
}

impl MusicHeadingElement {
    pub fn new(
        tempo: Option<TempoElement>,
        key: Option<KeyElement>,
        time: Option<TimeElement>,
    ) -> Self {
        let mut cells = CellSequence::new();
        let mut parts: Vec<&CellSequence> = Vec::new();
        if let Some(t) = &tempo {
            parts.push(t.cells());
        }
        if let Some(k) = &key {
            parts.push(k.cells());
        }
        if let Some(t) = &time {
            parts.push(t.cells());
        }
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                cells.push(CellKind::BLANK);
            }
            cells.append(part);
        }
        Self {
            tempo,
            key,
            time,
            cells,
        }
    }

    pub fn tempo(&self) -> Option<&TempoElement> {
        self.tempo.as_ref()
    }

    pub fn key(&self) -> Option<&KeyElement> {
        self.key.as_ref()
    }

    pub fn time(&self) -> Option<&TimeElement> {
        self.time.as_ref()
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!(
            "MusicHeading(tempo: {}, key: {}, time: {})",
            self.tempo.is_some(),
            self.key.is_some(),
            self.time.is_some()
        )
    }
}

/// Footnotes: an ordered list of text elements, blank-separated.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FootNotesElement {
    notes: Vec<WordsElement>,
    cells: CellSequence,
}

impl FootNotesElement {
    pub fn new(notes: Vec<WordsElement>) -> Self {
        let mut cells = CellSequence::new();
        for (i, note) in notes.iter().enumerate() {
            if i > 0 {
                cells.push(CellKind::BLANK);
            }
            cells.append(note.cells());
        }
        Self { notes, cells }
    }

    pub fn notes(&self) -> &[WordsElement] {
        &self.notes
    }

    pub fn cells(&self) -> &CellSequence {
        &self.cells
    }

    pub fn short_text(&self) -> String {
        format!("FootNotes({})", self.notes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::key::KeyKind;
    use crate::elements::time::TimeItem;

    #[test]
    fn test_pagination_braille_only() {
        let p = PaginationElement::new(3, 5, NumberingPolicy::BrailleOnly);
        assert_eq!(p.cells(), &number_cells(5, true));
    }

    #[test]
    fn test_pagination_both_when_numbers_differ() {
        let p = PaginationElement::new(3, 5, NumberingPolicy::Both);
        let expected = number_cells(3, true).cell_count() + 1 + number_cells(5, true).cell_count();
        assert_eq!(p.cells().cell_count(), expected);
    }

    #[test]
    fn test_pagination_both_collapses_equal_numbers() {
        let p = PaginationElement::new(4, 4, NumberingPolicy::Both);
        assert_eq!(p.cells(), &number_cells(4, true));
    }

    #[test]
    fn test_renumber_reencodes() {
        let mut p = PaginationElement::new(3, 3, NumberingPolicy::BrailleOnly);
        p.renumber(3, 7);
        assert_eq!(p.cells(), &number_cells(7, true));
        assert_eq!(p.print_page_number(), 3);
    }

    #[test]
    fn test_music_heading_blank_separated() {
        let key = KeyElement::new(KeyKind::Flats, 2);
        let time = TimeElement::new(vec![TimeItem::new(3, 4)]);
        let heading = MusicHeadingElement::new(None, Some(key.clone()), Some(time.clone()));
        assert_eq!(
            heading.cells().cell_count(),
            key.cells().cell_count() + 1 + time.cells().cell_count()
        );
    }

    #[test]
    fn test_empty_music_heading_is_empty() {
        let heading = MusicHeadingElement::new(None, None, None);
        assert!(heading.cells().is_empty());
    }
}
