//! Byte <-> variation selector mapping.
//!
//! Every byte value owns exactly one invisible codepoint drawn from two
//! Unicode variation-selector blocks:
//! - `U+FE00..=U+FE0F` (VS1-VS16) carries bytes `0..=15`
//! - `U+E0100..=U+E01EF` (VS17-VS256) carries bytes `16..=255`
//!
//! The mapping is a bijection over `0..=255`; any other codepoint is
//! reported as [`SymbolError::NotASelector`].

use thiserror::Error;

/// First codepoint of the low selector block.
pub const LOW_BASE: u32 = 0xFE00;

/// Number of codepoints in the low selector block.
pub const LOW_COUNT: u32 = 16;

/// First codepoint of the high (supplementary) selector block.
pub const HIGH_BASE: u32 = 0xE0100;

/// Number of codepoints in the high selector block.
pub const HIGH_COUNT: u32 = 240;

/// Errors raised by the symbol mapper.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Byte value must be between 0 and 255, got {0}")]
    OutOfRange(i64),

    #[error("Not a variation selector: {0:?}")]
    NotASelector(char),
}

/// Maps an integer to its selector, rejecting anything outside `0..=255`.
///
/// # Example
/// ```
/// use emojihide::encode_symbol;
///
/// assert_eq!(encode_symbol(15), Ok('\u{FE0F}'));
/// assert_eq!(encode_symbol(16), Ok('\u{E0100}'));
/// assert!(encode_symbol(256).is_err());
/// ```
pub fn encode_symbol(value: i64) -> Result<char, SymbolError> {
    let byte = u8::try_from(value).map_err(|_| SymbolError::OutOfRange(value))?;
    Ok(selector_for_byte(byte))
}

/// Maps a byte to its selector. Total over `u8`.
pub fn selector_for_byte(byte: u8) -> char {
    let byte = u32::from(byte);
    let codepoint = if byte < LOW_COUNT {
        LOW_BASE + byte
    } else {
        HIGH_BASE + (byte - LOW_COUNT)
    };

    // Both blocks lie outside the surrogate range, so this never falls back.
    char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Maps a selector back to the byte it carries.
pub fn decode_symbol(c: char) -> Result<u8, SymbolError> {
    let codepoint = c as u32;

    let value = if (LOW_BASE..LOW_BASE + LOW_COUNT).contains(&codepoint) {
        codepoint - LOW_BASE
    } else if (HIGH_BASE..HIGH_BASE + HIGH_COUNT).contains(&codepoint) {
        codepoint - HIGH_BASE + LOW_COUNT
    } else {
        return Err(SymbolError::NotASelector(c));
    };

    // value < 256 in both arms
    Ok(value as u8)
}

/// Returns true if `c` belongs to either selector block.
pub fn is_selector(c: char) -> bool {
    decode_symbol(c).is_ok()
}
