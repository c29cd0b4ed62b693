//! Payload decoding.
//!
//! The decoder orchestrates a single pass over the input:
//! 1. Discard the first scalar value (the carrier), whatever it is
//! 2. Map every remaining variation selector back to its byte
//! 3. Skip everything else silently
//!
//! CRITICAL: This decoder NEVER returns an error. Ordinary characters mixed
//! into the selectors (e.g. from a sloppy copy-paste) contribute nothing and
//! do not stop decoding. Callers that need strict validation must re-encode
//! and compare, or carry their own checksum inside the payload.

use std::str::Utf8Error;

use tracing::debug;

use crate::text::selector::decode_symbol;

/// Result of decoding a string.
/// Note: This is ALWAYS returned, even for input with no selectors at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedBytes {
    /// The recovered payload bytes, in encounter order.
    pub data: Vec<u8>,
    /// The discarded leading character. `None` only for empty input.
    pub carrier: Option<char>,
    /// Number of characters after the carrier that were not selectors.
    pub skipped: usize,
}

impl DecodedBytes {
    /// Views the payload as UTF-8 text.
    pub fn as_text(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.data)
    }

    /// Renders the payload as an escaped byte literal, e.g. `b'\xff\x00A'`.
    ///
    /// Used as the display fallback when the payload is not valid UTF-8.
    /// Quoting follows Python's `bytes` repr: single quotes unless the
    /// payload holds `'` but no `"`.
    pub fn escaped(&self) -> String {
        let quote = if self.data.contains(&b'\'') && !self.data.contains(&b'"') {
            '"'
        } else {
            '\''
        };

        let mut out = String::with_capacity(self.data.len() + 3);
        out.push('b');
        out.push(quote);
        for &byte in &self.data {
            match byte {
                b'\\' => out.push_str("\\\\"),
                b'\t' => out.push_str("\\t"),
                b'\n' => out.push_str("\\n"),
                b'\r' => out.push_str("\\r"),
                b if b == quote as u8 => {
                    out.push('\\');
                    out.push(quote);
                }
                0x20..=0x7e => out.push(byte as char),
                _ => out.push_str(&format!("\\x{:02x}", byte)),
            }
        }
        out.push(quote);
        out
    }

    /// Returns true if nothing was recovered.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Extracts the hidden bytes from `text`.
///
/// # Important
/// This function NEVER fails. Non-selector characters are ignored, and the
/// first character is always treated as the carrier even if it happens to
/// be a selector.
///
/// # Example
/// ```
/// use emojihide::{decode, encode};
///
/// assert_eq!(decode(&encode('😊', b"Hi")), b"Hi");
/// assert_eq!(decode("plain text"), b"");
/// ```
pub fn decode(text: &str) -> Vec<u8> {
    decode_detailed(text).data
}

/// Decodes `text` and reports what was discarded along the way.
pub fn decode_detailed(text: &str) -> DecodedBytes {
    let mut chars = text.chars();

    let Some(carrier) = chars.next() else {
        return DecodedBytes::default();
    };

    let mut data = Vec::with_capacity(chars.as_str().len() / 3);
    let mut skipped = 0;

    for c in chars {
        match decode_symbol(c) {
            Ok(byte) => data.push(byte),
            Err(_) => skipped += 1,
        }
    }

    debug!(
        carrier = %carrier.escape_unicode(),
        bytes = data.len(),
        skipped,
        "decoded selector payload"
    );

    DecodedBytes {
        data,
        carrier: Some(carrier),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::text::selector::selector_for_byte;

    #[test]
    fn test_empty_input() {
        assert!(decode("").is_empty());

        let detailed = decode_detailed("");
        assert_eq!(detailed.carrier, None);
        assert_eq!(detailed.skipped, 0);
    }

    #[test]
    fn test_carrier_only() {
        let detailed = decode_detailed("😊");
        assert!(detailed.is_empty());
        assert_eq!(detailed.carrier, Some('😊'));
    }

    #[test]
    fn test_carrier_is_never_payload() {
        let five = selector_for_byte(5);

        let plain = format!("X{}", five);
        assert_eq!(decode(&plain), vec![5]);

        // A carrier that is itself a selector is still discarded.
        let tricky = format!("{}{}", selector_for_byte(200), five);
        assert_eq!(decode(&tricky), vec![5]);
    }

    #[test]
    fn test_garbage_tolerance() {
        let text = format!("😊hello{}", selector_for_byte(7));
        let detailed = decode_detailed(&text);
        assert_eq!(detailed.data, vec![7]);
        assert_eq!(detailed.skipped, 5);
    }

    #[test]
    fn test_interleaved_noise_keeps_order() {
        let text = format!(
            "*{} {}\n{}!",
            selector_for_byte(1),
            selector_for_byte(2),
            selector_for_byte(3)
        );
        assert_eq!(decode(&text), vec![1, 2, 3]);
    }

    #[test]
    fn test_roundtrip_all_bytes() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode('Z', &data)), data);
    }

    #[test]
    fn test_as_text_and_escaped() {
        let text = decode_detailed(&encode('😊', "héllo".as_bytes()));
        assert_eq!(text.as_text(), Ok("héllo"));

        let raw = decode_detailed(&encode('😊', &[0xff, 0x00, b'A']));
        assert!(raw.as_text().is_err());
        assert_eq!(raw.escaped(), r"b'\xff\x00A'");
    }

    #[test]
    fn test_escaped_matches_python_repr() {
        let render = |data: &[u8]| {
            DecodedBytes {
                data: data.to_vec(),
                ..Default::default()
            }
            .escaped()
        };

        assert_eq!(render(b""), "b''");
        assert_eq!(render(b"a\tb\n\r\\"), r"b'a\tb\n\r\\'");
        assert_eq!(render(b"it's"), r#"b"it's""#);
        assert_eq!(render(b"'\""), r#"b'\'"'"#);
        assert_eq!(render(&[0x00, 0x7f, 0x80]), r"b'\x00\x7f\x80'");
    }
}
