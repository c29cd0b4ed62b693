//! # emojihide - Hide bytes inside a single character
//!
//! emojihide hides an arbitrary byte sequence behind one visible "carrier"
//! character by appending invisible Unicode variation selectors after it.
//!
//! ## Overview
//!
//! - Every byte maps to exactly one variation selector
//!   (`U+FE00..=U+FE0F` for `0..=15`, `U+E0100..=U+E01EF` for `16..=255`)
//! - The carrier comes first and carries no payload
//! - Most renderers draw the result as the carrier alone
//!
//! ## Decoding Model
//!
//! - **Never fails**: characters that are not selectors are skipped
//! - **Carrier skipped**: the first character is never decoded, even if it is a selector
//! - **Lenient**: stray text pasted between selectors is ignored
//!
//! ## Example Usage
//!
//! ```rust
//! use emojihide::{decode, encode};
//!
//! let hidden = encode('😊', "secret".as_bytes());
//! assert_eq!(hidden.chars().next(), Some('😊'));
//!
//! // Decode - NEVER fails
//! let recovered = decode(&hidden);
//! assert_eq!(recovered, b"secret");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Byte <-> variation selector mapping
//! - [`encoder`]: Payload encoding onto a carrier
//! - [`decoder`]: Payload decoding (never fails)
//! - [`config`]: Persisted user settings

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod text;

// Re-export commonly used types at the crate root
pub use config::{Config, ConfigError, DEFAULT_CARRIER};
pub use decoder::{decode, decode_detailed, DecodedBytes};
pub use encoder::{encode, encode_text};
pub use text::selector::{
    decode_symbol, encode_symbol, is_selector, selector_for_byte, SymbolError, HIGH_BASE,
    HIGH_COUNT, LOW_BASE, LOW_COUNT,
};
