//! DTMF dual-tone encoding.
//!
//! Standard DTMF keypad layout:
//!
//! ```text
//!          1209 Hz   1336 Hz   1477 Hz   1633 Hz
//! 697 Hz      1         2         3         A
//! 770 Hz      4         5         6         B
//! 852 Hz      7         8         9         C
//! 941 Hz      *         0         #         D
//! ```
//!
//! Each input character is split into its two hex digits, and each digit
//! maps to one keypad symbol: 0-9 directly, a-d to A-D, e to `*` and f to
//! `#`. The mapping is a total bijection over the 16 digits, so a decoder
//! can recover a digit by identifying which row and column frequency are
//! simultaneously present.

use crate::schemes::FrequencyDescriptor;

pub const ROW_FREQUENCIES: [f64; 4] = [697.0, 770.0, 852.0, 941.0];
pub const COL_FREQUENCIES: [f64; 4] = [1209.0, 1336.0, 1477.0, 1633.0];

/// Keypad (row, column) per hex digit value 0x0..=0xf.
const DIGIT_KEYS: [(usize, usize); 16] = [
    (3, 1), // 0 -> '0'
    (0, 0), // 1 -> '1'
    (0, 1), // 2 -> '2'
    (0, 2), // 3 -> '3'
    (1, 0), // 4 -> '4'
    (1, 1), // 5 -> '5'
    (1, 2), // 6 -> '6'
    (2, 0), // 7 -> '7'
    (2, 1), // 8 -> '8'
    (2, 2), // 9 -> '9'
    (0, 3), // a -> 'A'
    (1, 3), // b -> 'B'
    (2, 3), // c -> 'C'
    (3, 3), // d -> 'D'
    (3, 0), // e -> '*'
    (3, 2), // f -> '#'
];

/// Row and column tone pair for one hex digit.
///
/// # Panics
///
/// Panics if `digit` is not a hex digit value (0-15); callers derive digits
/// by splitting a byte, which cannot produce anything larger.
pub fn digit_descriptor(digit: u8) -> FrequencyDescriptor {
    let (row, col) = DIGIT_KEYS[digit as usize];
    FrequencyDescriptor::Dual(ROW_FREQUENCIES[row], COL_FREQUENCIES[col])
}

/// The two tone pairs encoding one character: high nibble first.
pub fn byte_descriptors(code: u8) -> [FrequencyDescriptor; 2] {
    [digit_descriptor(code >> 4), digit_descriptor(code & 0x0f)]
}
