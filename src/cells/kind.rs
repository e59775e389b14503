//! The closed 6-dot cell alphabet
//!
//! Every legal dot pattern of a 6-dot Braille cell, including the blank
//! cell, with semantic aliases for the patterns the music encoders use
//! (number sign, accidentals, octave marks, hyphen, metronome equals).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic 6-dot Braille cell, identified by its dot pattern.
///
/// The discriminant is the dot mask: bit `i` set means dot `i + 1` raised.
/// The alphabet is closed and total; every mask 0..=63 names a legal cell.
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// ⠀ (no dots, the blank cell)
    DotsNone = 0b000000,
    /// ⠁ (dots 1)
    Dots1 = 0b000001,
    /// ⠂ (dots 2)
    Dots2 = 0b000010,
    /// ⠃ (dots 12)
    Dots12 = 0b000011,
    /// ⠄ (dots 3)
    Dots3 = 0b000100,
    /// ⠅ (dots 13)
    Dots13 = 0b000101,
    /// ⠆ (dots 23)
    Dots23 = 0b000110,
    /// ⠇ (dots 123)
    Dots123 = 0b000111,
    /// ⠈ (dots 4)
    Dots4 = 0b001000,
    /// ⠉ (dots 14)
    Dots14 = 0b001001,
    /// ⠊ (dots 24)
    Dots24 = 0b001010,
    /// ⠋ (dots 124)
    Dots124 = 0b001011,
    /// ⠌ (dots 34)
    Dots34 = 0b001100,
    /// ⠍ (dots 134)
    Dots134 = 0b001101,
    /// ⠎ (dots 234)
    Dots234 = 0b001110,
    /// ⠏ (dots 1234)
    Dots1234 = 0b001111,
    /// ⠐ (dots 5)
    Dots5 = 0b010000,
    /// ⠑ (dots 15)
    Dots15 = 0b010001,
    /// ⠒ (dots 25)
    Dots25 = 0b010010,
    /// ⠓ (dots 125)
    Dots125 = 0b010011,
    /// ⠔ (dots 35)
    Dots35 = 0b010100,
    /// ⠕ (dots 135)
    Dots135 = 0b010101,
    /// ⠖ (dots 235)
    Dots235 = 0b010110,
    /// ⠗ (dots 1235)
    Dots1235 = 0b010111,
    /// ⠘ (dots 45)
    Dots45 = 0b011000,
    /// ⠙ (dots 145)
    Dots145 = 0b011001,
    /// ⠚ (dots 245)
    Dots245 = 0b011010,
    /// ⠛ (dots 1245)
    Dots1245 = 0b011011,
    /// ⠜ (dots 345)
    Dots345 = 0b011100,
    /// ⠝ (dots 1345)
    Dots1345 = 0b011101,
    /// ⠞ (dots 2345)
    Dots2345 = 0b011110,
    /// ⠟ (dots 12345)
    Dots12345 = 0b011111,
    /// ⠠ (dots 6)
    Dots6 = 0b100000,
    /// ⠡ (dots 16)
    Dots16 = 0b100001,
    /// ⠢ (dots 26)
    Dots26 = 0b100010,
    /// ⠣ (dots 126)
    Dots126 = 0b100011,
    /// ⠤ (dots 36)
    Dots36 = 0b100100,
    /// ⠥ (dots 136)
    Dots136 = 0b100101,
    /// ⠦ (dots 236)
    Dots236 = 0b100110,
    /// ⠧ (dots 1236)
    Dots1236 = 0b100111,
    /// ⠨ (dots 46)
    Dots46 = 0b101000,
    /// ⠩ (dots 146)
    Dots146 = 0b101001,
    /// ⠪ (dots 246)
    Dots246 = 0b101010,
    /// ⠫ (dots 1246)
    Dots1246 = 0b101011,
    /// ⠬ (dots 346)
    Dots346 = 0b101100,
    /// ⠭ (dots 1346)
    Dots1346 = 0b101101,
    /// ⠮ (dots 2346)
    Dots2346 = 0b101110,
    /// ⠯ (dots 12346)
    Dots12346 = 0b101111,
    /// ⠰ (dots 56)
    Dots56 = 0b110000,
    /// ⠱ (dots 156)
    Dots156 = 0b110001,
    /// ⠲ (dots 256)
    Dots256 = 0b110010,
    /// ⠳ (dots 1256)
    Dots1256 = 0b110011,
    /// ⠴ (dots 356)
    Dots356 = 0b110100,
    /// ⠵ (dots 1356)
    Dots1356 = 0b110101,
    /// ⠶ (dots 2356)
    Dots2356 = 0b110110,
    /// ⠷ (dots 12356)
    Dots12356 = 0b110111,
    /// ⠸ (dots 456)
    Dots456 = 0b111000,
    /// ⠹ (dots 1456)
    Dots1456 = 0b111001,
    /// ⠺ (dots 2456)
    Dots2456 = 0b111010,
    /// ⠻ (dots 12456)
    Dots12456 = 0b111011,
    /// ⠼ (dots 3456)
    Dots3456 = 0b111100,
    /// ⠽ (dots 13456)
    Dots13456 = 0b111101,
    /// ⠾ (dots 23456)
    Dots23456 = 0b111110,
    /// ⠿ (dots 123456)
    Dots123456 = 0b111111,
}

impl CellKind {
    /// The blank cell (one fixed-width space on the Braille line)
    pub const BLANK: CellKind = CellKind::DotsNone;
    /// Number sign, prefixed to digit runs
    pub const NUMBER_SIGN: CellKind = CellKind::Dots3456;
    /// Capital sign, prefixed to an upper-case letter
    pub const CAPITAL_SIGN: CellKind = CellKind::Dots6;
    /// Word sign, prefixed to dynamics text
    pub const WORD_SIGN: CellKind = CellKind::Dots345;
    /// Sharp accidental
    pub const SHARP: CellKind = CellKind::Dots146;
    /// Flat accidental
    pub const FLAT: CellKind = CellKind::Dots126;
    /// Natural accidental
    pub const NATURAL: CellKind = CellKind::Dots16;
    /// Augmentation dot (one per dot of the note value)
    pub const AUGMENTATION_DOT: CellKind = CellKind::Dots3;
    /// Hyphen, also the range separator inside metronome numbers
    pub const HYPHEN: CellKind = CellKind::Dots36;
    /// The "equals" between a metronome beat unit and its number
    pub const METRONOME_EQUALS: CellKind = CellKind::Dots2356;

    /// Every cell kind, in dot-mask order.
    pub const ALL: [CellKind; 64] = {
        use CellKind::*;
        [
            DotsNone, Dots1, Dots2, Dots12, Dots3, Dots13, Dots23, Dots123, Dots4, Dots14,
            Dots24, Dots124, Dots34, Dots134, Dots234, Dots1234, Dots5, Dots15, Dots25, Dots125,
            Dots35, Dots135, Dots235, Dots1235, Dots45, Dots145, Dots245, Dots1245, Dots345,
            Dots1345, Dots2345, Dots12345, Dots6, Dots16, Dots26, Dots126, Dots36, Dots136,
            Dots236, Dots1236, Dots46, Dots146, Dots246, Dots1246, Dots346, Dots1346, Dots2346,
            Dots12346, Dots56, Dots156, Dots256, Dots1256, Dots356, Dots1356, Dots2356,
            Dots12356, Dots456, Dots1456, Dots2456, Dots12456, Dots3456, Dots13456, Dots23456,
            Dots123456,
        ]
    };

    /// The dot mask: bit `i` set means dot `i + 1` raised.
    pub fn dots_mask(self) -> u8 {
        self as u8
    }

    /// Look a cell up by its dot mask. Total over 0..=63.
    pub fn from_dots_mask(mask: u8) -> Option<CellKind> {
        CellKind::ALL.get(mask as usize).copied()
    }

    /// True for the blank cell.
    pub fn is_blank(self) -> bool {
        self == CellKind::DotsNone
    }

    /// Compact dot-digit form for logs and tests: `"145"`, or `"."` for the
    /// blank cell. Not an output encoding.
    pub fn as_short_string(self) -> String {
        let mask = self.dots_mask();
        if mask == 0 {
            return ".".to_string();
        }
        let mut s = String::new();
        for dot in 1..=6u8 {
            if mask & (1 << (dot - 1)) != 0 {
                s.push((b'0' + dot) as char);
            }
        }
        s
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_short_string())
    }
}

/// Upper-cell digit (the a–j patterns): `1..=9` and `0`.
pub fn upper_digit_cell(digit: u8) -> Option<CellKind> {
    use CellKind::*;
    match digit {
        1 => Some(Dots1),
        2 => Some(Dots12),
        3 => Some(Dots14),
        4 => Some(Dots145),
        5 => Some(Dots15),
        6 => Some(Dots124),
        7 => Some(Dots1245),
        8 => Some(Dots125),
        9 => Some(Dots24),
        0 => Some(Dots245),
        _ => None,
    }
}

/// Lower-cell digit, used for time-signature denominators.
pub fn lower_digit_cell(digit: u8) -> Option<CellKind> {
    use CellKind::*;
    match digit {
        1 => Some(Dots2),
        2 => Some(Dots23),
        3 => Some(Dots25),
        4 => Some(Dots256),
        5 => Some(Dots26),
        6 => Some(Dots235),
        7 => Some(Dots2356),
        8 => Some(Dots236),
        9 => Some(Dots35),
        0 => Some(Dots356),
        _ => None,
    }
}

/// Literary letter cell for a lower-case ASCII letter.
pub fn letter_cells(letter: char) -> Option<CellKind> {
    use CellKind::*;
    match letter {
        'a' => Some(Dots1),
        'b' => Some(Dots12),
        'c' => Some(Dots14),
        'd' => Some(Dots145),
        'e' => Some(Dots15),
        'f' => Some(Dots124),
        'g' => Some(Dots1245),
        'h' => Some(Dots125),
        'i' => Some(Dots24),
        'j' => Some(Dots245),
        'k' => Some(Dots13),
        'l' => Some(Dots123),
        'm' => Some(Dots134),
        'n' => Some(Dots1345),
        'o' => Some(Dots135),
        'p' => Some(Dots1234),
        'q' => Some(Dots12345),
        'r' => Some(Dots1235),
        's' => Some(Dots234),
        't' => Some(Dots2345),
        'u' => Some(Dots136),
        'v' => Some(Dots1236),
        'w' => Some(Dots2456),
        'x' => Some(Dots1346),
        'y' => Some(Dots13456),
        'z' => Some(Dots1356),
        _ => None,
    }
}
