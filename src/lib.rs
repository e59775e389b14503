//! Braille music score document model and cell-encoding codec
//!
//! One stage of a music-notation pipeline: an upstream lowering pass walks a
//! resolved music-score tree and appends musical facts (notes, signatures,
//! tempo, dynamics, barlines, numbers) to the containers here; each fact
//! encodes itself once into a sequence of 6-dot Braille cells. Lines and
//! pages carry declared capacities and dual print/Braille numbering; a
//! later finalization pass may reassign the Braille numbers, and a printer
//! component (not part of this crate) maps the cell sequences to a physical
//! output encoding.

pub mod cells;
pub mod diagnostics;
pub mod elements;
pub mod errors;
pub mod layout;
pub mod options;
pub mod visitor;

// Re-export the types the lowering and finalization passes touch most
pub use cells::{CellKind, CellSequence};
pub use elements::{LineElement, LineElementKind, PageElement, PageElementKind};
pub use errors::ScoreError;
pub use layout::{Line, LineContents, LineContentsKind, Page, SeparatorState};
pub use options::{NumberingPolicy, RenderOptions};
pub use visitor::ScoreVisitor;
