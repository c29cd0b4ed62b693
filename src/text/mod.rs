//! Unicode symbol handling for emojihide.
//!
//! This module provides:
//! - The byte <-> variation selector bijection
//! - Selector block constants

pub mod selector;

pub use selector::{
    decode_symbol, encode_symbol, is_selector, selector_for_byte, SymbolError, HIGH_BASE,
    HIGH_COUNT, LOW_BASE, LOW_COUNT,
};
