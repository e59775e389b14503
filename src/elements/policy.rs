//! Trailing-separator policy
//!
//! The single owned answer to "does element kind K request one blank cell
//! before whatever follows it?". Keeping the table in one place means a new
//! construct gets a deliberate decision here instead of ad-hoc spacing at
//! every append site.

use super::LineElementKind;

/// Kinds that want one auto-inserted blank cell after them: key and time
/// signatures, tempo indications, and measure markers. Notes, numbers,
/// dynamics, words, barlines and explicit spaces space themselves.
pub fn requests_trailing_separator(kind: &LineElementKind) -> bool {
    match kind {
        LineElementKind::Key(_)
        | LineElementKind::Time(_)
        | LineElementKind::Tempo(_)
        | LineElementKind::Measure(_) => true,
        LineElementKind::Spaces(_)
        | LineElementKind::Barline(_)
        | LineElementKind::Note(_)
        | LineElementKind::Dynamics(_)
        | LineElementKind::Number(_)
        | LineElementKind::Words(_) => false,
    }
}
