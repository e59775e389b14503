//! Rendering configuration
//!
//! Process-wide, read-only settings supplied when containers are created
//! and when the finalization pass renders numbers. This engine never
//! mutates them.

use serde::{Deserialize, Serialize};

/// Which numbering scheme pagination and measure numbers encode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberingPolicy {
    /// Only the Braille edition's own numbers.
    #[default]
    BrailleOnly,
    /// Only the original print edition's numbers.
    PrintOnly,
    /// Both, print first, when they differ at render time.
    Both,
}

/// Layout capacities and suppression switches.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Declared cell capacity of one Braille line.
    pub cells_per_line: usize,
    /// Declared line capacity of one Braille page.
    pub lines_per_page: usize,
    /// Which numbers pagination and measure markers render.
    pub numbering: NumberingPolicy,
    /// Suppress line numbers entirely.
    pub omit_line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        // 40x25 is the common interpoint page format
        Self {
            cells_per_line: 40,
            lines_per_page: 25,
            numbering: NumberingPolicy::default(),
            omit_line_numbers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_format() {
        let opts = RenderOptions::default();
        assert_eq!(opts.cells_per_line, 40);
        assert_eq!(opts.lines_per_page, 25);
        assert_eq!(opts.numbering, NumberingPolicy::BrailleOnly);
    }
}
