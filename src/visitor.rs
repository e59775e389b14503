//! Tree traversal
//!
//! An external visitor walks Page → PageElement → Line → LineContents →
//! LineElement in append order. Containers are handed to the hooks
//! transiently during the walk; children store no upward pointers.

use crate::elements::{LineElement, PageElement, PageElementKind};
use crate::layout::{Line, LineContents, Page};

/// Paired enter/leave hooks over the document tree. Every hook has an
/// empty default body; implement only the ones the traversal needs.
pub trait ScoreVisitor {
    fn enter_page(&mut self, _page: &Page) {}
    fn leave_page(&mut self, _page: &Page) {}

    fn enter_page_element(&mut self, _element: &PageElement) {}
    fn leave_page_element(&mut self, _element: &PageElement) {}

    fn enter_line(&mut self, _line: &Line) {}
    fn leave_line(&mut self, _line: &Line) {}

    fn enter_line_contents(&mut self, _contents: &LineContents) {}
    fn leave_line_contents(&mut self, _contents: &LineContents) {}

    fn visit_line_element(&mut self, _element: &LineElement) {}
}

/// Walk a page and everything under it, in order.
pub fn browse_page<V: ScoreVisitor>(page: &Page, visitor: &mut V) {
    visitor.enter_page(page);
    for element in page.elements() {
        browse_page_element(element, visitor);
    }
    visitor.leave_page(page);
}

/// Walk one page element; lines recurse into their segments.
pub fn browse_page_element<V: ScoreVisitor>(element: &PageElement, visitor: &mut V) {
    visitor.enter_page_element(element);
    if let PageElementKind::Line(line) = element.kind() {
        browse_line(line, visitor);
    }
    visitor.leave_page_element(element);
}

/// Walk a line's segments and their elements, in order.
pub fn browse_line<V: ScoreVisitor>(line: &Line, visitor: &mut V) {
    visitor.enter_line(line);
    for contents in line.contents() {
        visitor.enter_line_contents(contents);
        for element in contents.elements() {
            visitor.visit_line_element(element);
        }
        visitor.leave_line_contents(contents);
    }
    visitor.leave_line(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{LineElement, LineElementKind, NumberElement};

    #[derive(Default)]
    struct CountingVisitor {
        pages: usize,
        lines: usize,
        segments: usize,
        elements: usize,
        balanced: isize,
    }

    impl ScoreVisitor for CountingVisitor {
        fn enter_page(&mut self, _page: &Page) {
            self.pages += 1;
            self.balanced += 1;
        }
        fn leave_page(&mut self, _page: &Page) {
            self.balanced -= 1;
        }
        fn enter_line(&mut self, _line: &Line) {
            self.lines += 1;
            self.balanced += 1;
        }
        fn leave_line(&mut self, _line: &Line) {
            self.balanced -= 1;
        }
        fn enter_line_contents(&mut self, _contents: &LineContents) {
            self.segments += 1;
        }
        fn visit_line_element(&mut self, _element: &LineElement) {
            self.elements += 1;
        }
    }

    #[test]
    fn test_browse_visits_everything_in_order() {
        let mut line = Line::new(1, 40);
        line.append(LineElement::new(
            1,
            LineElementKind::Number(NumberElement::new(1, true)),
        ));
        line.append(LineElement::new(
            1,
            LineElementKind::Number(NumberElement::new(2, true)),
        ));
        let mut page = Page::new(1, 25);
        page.append(PageElement::new(1, PageElementKind::Line(line)));

        let mut visitor = CountingVisitor::default();
        browse_page(&page, &mut visitor);
        assert_eq!(visitor.pages, 1);
        assert_eq!(visitor.lines, 1);
        assert_eq!(visitor.segments, 1);
        assert_eq!(visitor.elements, 2);
        assert_eq!(visitor.balanced, 0);
    }
}
