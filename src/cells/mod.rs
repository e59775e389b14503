//! Braille cell alphabet and cell sequences
//!
//! This module defines the codec's alphabet (`CellKind`, the closed set of
//! 6-dot patterns) and its output unit (`CellSequence`, an ordered,
//! concatenable run of cells). The codec is write-only: mapping cells to a
//! physical output encoding (Unicode Braille, embosser bytes) belongs to a
//! separate printer component.

pub mod kind;
pub mod sequence;

pub use kind::{letter_cells, lower_digit_cell, upper_digit_cell, CellKind};
pub use sequence::CellSequence;
