//! Pages
//!
//! A page is an ordered list of page elements (headings, the music
//! heading, footnotes, lines) in physical print order, a declared line
//! capacity, and dual print/Braille page numbers. No automatic spacing
//! happens at this level; spacing is a line-local concern.

use serde::Serialize;

use crate::elements::{PageElement, PageElementKind};
use crate::layout::line::Line;

/// One Braille page.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Page {
    print_page_number: usize,
    braille_page_number: usize,
    lines_per_page: usize,
    elements: Vec<PageElement>,
}

impl Page {
    /// Create an empty page; the Braille number starts equal to the print
    /// number.
    pub fn new(print_page_number: usize, lines_per_page: usize) -> Self {
        Self {
            print_page_number,
            braille_page_number: print_page_number,
            lines_per_page,
            elements: Vec::new(),
        }
    }

    pub fn print_page_number(&self) -> usize {
        self.print_page_number
    }

    pub fn braille_page_number(&self) -> usize {
        self.braille_page_number
    }

    /// Reassign the Braille page number (finalization pass) and re-encode
    /// any pagination marks the page already carries.
    pub fn set_braille_page_number(&mut self, number: usize) {
        self.braille_page_number = number;
        for element in &mut self.elements {
            if let PageElementKind::Pagination(pagination) = element.kind_mut() {
                pagination.renumber(self.print_page_number, number);
            }
        }
    }

    /// Declared line capacity; this layer never enforces it.
    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [PageElement] {
        &mut self.elements
    }

    /// Append a page element, in physical print order.
    pub fn append(&mut self, element: PageElement) {
        log::trace!(
            "page {}: append {}",
            self.print_page_number,
            element.short_text()
        );
        self.elements.push(element);
    }

    /// The lines on this page, in order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.elements.iter().filter_map(|e| e.as_line())
    }

    /// The lines on this page, mutably; used by the finalization pass to
    /// reassign Braille line numbers.
    pub fn lines_mut(&mut self) -> impl Iterator<Item = &mut Line> {
        self.elements.iter_mut().filter_map(|e| match e.kind_mut() {
            PageElementKind::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Sum over the page's lines of their wrap-segment counts. The
    /// finalization pass uses this to decide whether a Braille line number
    /// is skipped or merged relative to the print numbering.
    pub fn line_contents_count(&self) -> usize {
        self.lines().map(|line| line.contents_count()).sum()
    }

    pub fn short_text(&self) -> String {
        format!(
            "Page(print {}, braille {}, {} element(s))",
            self.print_page_number,
            self.braille_page_number,
            self.elements.len()
        )
    }
}
