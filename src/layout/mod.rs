//! Capacity-bounded layout containers
//!
//! Lines hold wrap segments of line elements; pages hold lines, headings,
//! pagination and footnotes. Both carry dual print/Braille numbers and a
//! declared capacity; the decision of when a line or page is full belongs
//! to the upstream lowering pass, this layer only exposes and honors the
//! declared capacities.

pub mod line;
pub mod page;

pub use line::{Line, LineContents, LineContentsKind, SeparatorState};
pub use page::Page;
