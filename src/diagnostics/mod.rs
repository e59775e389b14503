//! Diagnostic dumps of the document tree
//!
//! Human-oriented output for logs and tests: an indented text dump built
//! on the visitor, and a JSON dump of any serializable node. Neither is an
//! output encoding; the printer component owns that.

use serde::Serialize;

use crate::elements::{LineElement, PageElement};
use crate::layout::{Line, LineContents, Page};
use crate::visitor::{browse_page, ScoreVisitor};

/// Builds an indented, line-per-node text form of a page.
#[derive(Default)]
pub struct TreeDump {
    depth: usize,
    out: String,
}

impl TreeDump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dump a whole page.
    pub fn dump_page(page: &Page) -> String {
        let mut dump = TreeDump::new();
        browse_page(page, &mut dump);
        dump.out
    }

    fn push_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl ScoreVisitor for TreeDump {
    fn enter_page(&mut self, page: &Page) {
        self.push_line(&page.short_text());
        self.depth += 1;
    }

    fn leave_page(&mut self, _page: &Page) {
        self.depth -= 1;
    }

    fn enter_page_element(&mut self, element: &PageElement) {
        if element.as_line().is_none() {
            self.push_line(&element.short_text());
        }
    }

    fn enter_line(&mut self, line: &Line) {
        self.push_line(&line.short_text());
        self.depth += 1;
    }

    fn leave_line(&mut self, _line: &Line) {
        self.depth -= 1;
    }

    fn enter_line_contents(&mut self, contents: &LineContents) {
        self.push_line(&format!(
            "{:?} segment, {} cell(s)",
            contents.kind(),
            contents.cells_count()
        ));
        self.depth += 1;
    }

    fn leave_line_contents(&mut self, _contents: &LineContents) {
        self.depth -= 1;
    }

    fn visit_line_element(&mut self, element: &LineElement) {
        self.push_line(&element.debug_text());
    }
}

/// Pretty JSON of any serializable node, for logging and test fixtures.
pub fn dump_json<T: Serialize>(node: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{KeyElement, KeyKind, LineElementKind, PageElementKind};

    #[test]
    fn test_tree_dump_mentions_every_level() {
        let mut line = Line::new(1, 40);
        line.append(LineElement::new(
            3,
            LineElementKind::Key(KeyElement::new(KeyKind::Flats, 1)),
        ));
        let mut page = Page::new(1, 25);
        page.append(PageElement::new(1, PageElementKind::Line(line)));

        let dump = TreeDump::dump_page(&page);
        assert!(dump.contains("Page(print 1"));
        assert!(dump.contains("Line(print 1"));
        assert!(dump.contains("Regular segment"));
        assert!(dump.contains("Key"));
    }

    #[test]
    fn test_json_dump_round_trips_through_serde() {
        let line = Line::new(2, 40);
        let json = dump_json(&line).unwrap();
        assert!(json.contains("\"print_line_number\": 2"));
    }
}
