#![forbid(unsafe_code)]
//! Barcode encoding functionality.
//!
//! This module turns text into a [`BitPattern`]: the start sentinel, one fixed-width
//! pattern per input character and the stop sentinel, written as `'1'` (bar) and
//! `'0'` (space) modules. Supported symbologies are Code 128 (code set B) and
//! Code 39. EAN-13 is accepted as a name but currently encodes as Code 128.
use crate::tables::{self, CODE128_START, CODE128_STOP, CODE39_SENTINEL};
use core::fmt;

/// The symbologies a barcode can be encoded with.
///
/// Each variant carries its own policy for characters missing from its table:
/// Code 128 substitutes the pattern of `'0'`, Code 39 drops the character. The
/// two policies are observably different and are kept apart on purpose.
///
/// # Example
///
/// ```rust
/// use barcode_svg::barcode::SymbologyKind;
///
/// let kind = SymbologyKind::from_name("CODE39");
/// let pattern = kind.encode("HELLO");
/// assert_eq!(pattern.len(), 89);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SymbologyKind {
    /// Code 128, code set B, without check character.
    #[default]
    Code128,
    /// Code 39 with `*` start/stop and narrow inter-character gaps.
    Code39,
    /// Named alias: encodes exactly like [`SymbologyKind::Code128`]. No guard
    /// bars, number system digit or mod-10 checksum are produced.
    Ean13,
}

impl SymbologyKind {
    /// Resolves a format name, case-sensitively.
    ///
    /// Unrecognized names fall back to [`SymbologyKind::Code128`]; this never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "CODE128" => Self::Code128,
            "CODE39" => Self::Code39,
            "EAN13" => Self::Ean13,
            other => {
                log::debug!("Unknown barcode format {:?}, using CODE128", other);
                Self::Code128
            }
        }
    }

    /// Returns the canonical format name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code128 => "CODE128",
            Self::Code39 => "CODE39",
            Self::Ean13 => "EAN13",
        }
    }

    /// Encodes `text` with this symbology.
    pub fn encode(self, text: &str) -> BitPattern {
        match self {
            Self::Code128 | Self::Ean13 => encode_code128(text),
            Self::Code39 => encode_code39(text),
        }
    }
}

impl fmt::Display for SymbologyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full module sequence of a barcode, as a string of `'0'` and `'1'`.
///
/// A pattern always contains its start and stop sentinels, so it is never empty.
/// Instances are only produced by the encoders of this module.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitPattern(String);

impl BitPattern {
    fn with_start(start: &str, capacity: usize) -> Self {
        let mut bits = String::with_capacity(capacity);
        bits.push_str(start);
        Self(bits)
    }

    fn push(&mut self, pattern: &str) {
        self.0.push_str(pattern);
    }

    /// Number of modules, bars and spaces alike.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The modules as a string of `'0'` and `'1'`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the modules left to right, `true` meaning a bar.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes `text` as Code 128 (code set B).
///
/// Characters outside `' '..='~'` are replaced by the pattern of `'0'`. Input is
/// walked by Unicode scalar value, so a multi-byte character is one substitution.
/// No modulo-103 check character is appended.
///
/// The result is `11 + 11 * chars + 13` modules long.
pub fn encode_code128(text: &str) -> BitPattern {
    let chars = text.chars().count();
    let mut bits = BitPattern::with_start(
        CODE128_START,
        CODE128_START.len() + chars * tables::CODE128_CHAR_WIDTH + CODE128_STOP.len(),
    );
    for c in text.chars() {
        match tables::lookup(SymbologyKind::Code128, c) {
            Some(pattern) => bits.push(pattern),
            None => {
                log::debug!("Character {:?} not in CODE128, substituting '0'", c);
                bits.push(CODE128_FALLBACK);
            }
        }
    }
    bits.push(CODE128_STOP);
    bits
}

/// Encodes `text` as Code 39.
///
/// The text is uppercased first. Every encodable character is preceded by a
/// single narrow gap; anything else is silently dropped. An input with no
/// encodable character yields the two sentinels back to back.
pub fn encode_code39(text: &str) -> BitPattern {
    let upper = text.to_uppercase();
    let chars = upper.chars().count();
    let mut bits = BitPattern::with_start(
        CODE39_SENTINEL,
        2 * CODE39_SENTINEL.len() + chars * (tables::CODE39_CHAR_WIDTH + 1),
    );
    for c in upper.chars() {
        match tables::lookup(SymbologyKind::Code39, c) {
            Some(pattern) => {
                bits.push("0");
                bits.push(pattern);
            }
            None => log::debug!("Character {:?} not in CODE39, dropping it", c),
        }
    }
    bits.push(CODE39_SENTINEL);
    bits
}

/// Pattern written for characters Code 128 cannot encode: the pattern of `'0'`.
const CODE128_FALLBACK: &str = "10011101100";
