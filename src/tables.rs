//! Constant module patterns for every supported symbology.
//!
//! Each table maps one input character to a fixed-length string of `'0'`/`'1'`
//! modules. All patterns of one table share the same width: 11 modules for
//! Code 128 (code set B) and 12 modules for Code 39 (wide elements drawn as two
//! modules). Tables are plain statics and never change after compilation.

use crate::barcode::SymbologyKind;

/// Width in modules of one Code 128 character pattern.
pub const CODE128_CHAR_WIDTH: usize = 11;

/// Width in modules of one Code 39 character pattern.
pub const CODE39_CHAR_WIDTH: usize = 12;

/// Code 128 start pattern (Start B).
pub const CODE128_START: &str = "11010010000";

/// Code 128 stop pattern, including the terminating bar.
pub const CODE128_STOP: &str = "1100011101011";

/// Code 39 start/stop character (`*`).
pub const CODE39_SENTINEL: &str = "100101101101";

/// First character covered by [`CODE128_PATTERNS`].
const CODE128_FIRST: char = ' ';

/// Code set B patterns for `' '` through `'~'`, indexed by `c - ' '`.
static CODE128_PATTERNS: [&str; 95] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
];

/// Code 39 patterns for digits, uppercase letters and `- . space $ / + %`.
static CODE39_PATTERNS: [(char, &str); 43] = [
    ('0', "101001101101"),
    ('1', "110100101011"),
    ('2', "101100101011"),
    ('3', "110110010101"),
    ('4', "101001101011"),
    ('5', "110100110101"),
    ('6', "101100110101"),
    ('7', "101001011011"),
    ('8', "110100101101"),
    ('9', "101100101101"),
    ('A', "110101001011"),
    ('B', "101101001011"),
    ('C', "110110100101"),
    ('D', "101011001011"),
    ('E', "110101100101"),
    ('F', "101101100101"),
    ('G', "101010011011"),
    ('H', "110101001101"),
    ('I', "101101001101"),
    ('J', "101011001101"),
    ('K', "110101010011"),
    ('L', "101101010011"),
    ('M', "110110101001"),
    ('N', "101011010011"),
    ('O', "110101101001"),
    ('P', "101101101001"),
    ('Q', "101010110011"),
    ('R', "110101011001"),
    ('S', "101101011001"),
    ('T', "101011011001"),
    ('U', "110010101011"),
    ('V', "100110101011"),
    ('W', "110011010101"),
    ('X', "100101101011"),
    ('Y', "110010110101"),
    ('Z', "100110110101"),
    ('-', "100101011011"),
    ('.', "110010101101"),
    (' ', "100110101101"),
    ('$', "100100100101"),
    ('/', "100100101001"),
    ('+', "100101001001"),
    ('%', "101001001001"),
];

/// Returns the Code 128 pattern for `c`, or `None` outside `' '..='~'`.
pub fn code128_pattern(c: char) -> Option<&'static str> {
    if !(' '..='~').contains(&c) {
        return None;
    }
    CODE128_PATTERNS.get((c as usize) - (CODE128_FIRST as usize)).copied()
}

/// Returns the Code 39 pattern for `c`. Lowercase letters are not in the table;
/// the encoder uppercases its input first.
pub fn code39_pattern(c: char) -> Option<&'static str> {
    CODE39_PATTERNS
        .iter()
        .find(|&&(key, _)| key == c)
        .map(|&(_, pattern)| pattern)
}

/// Looks up the pattern of a single character in the table of `kind`.
///
/// This is the entry point the encoders use. The EAN-13 alias reads the
/// Code 128 table, like its encoder does.
pub fn lookup(kind: SymbologyKind, c: char) -> Option<&'static str> {
    match kind {
        SymbologyKind::Code128 | SymbologyKind::Ean13 => code128_pattern(c),
        SymbologyKind::Code39 => code39_pattern(c),
    }
}
