//! Payload encoding.
//!
//! Encoding is a single pass: the carrier character is emitted first and
//! every payload byte is appended as its variation selector. The carrier
//! itself carries no payload bits.
//!
//! Encoding NEVER fails - every `u8` has a selector.

use crate::text::selector::selector_for_byte;

/// Worst-case UTF-8 width of a selector (the high block is 4 bytes).
const SELECTOR_UTF8_LEN: usize = 4;

/// Hides `data` behind `carrier`.
///
/// # Arguments
/// * `carrier` - Visible character the selectors attach to (any scalar value)
/// * `data` - Payload bytes, possibly empty
///
/// # Returns
/// `carrier` followed by one selector per byte, in order.
///
/// # Example
/// ```
/// use emojihide::encode;
///
/// let hidden = encode('😊', b"Hi");
/// assert_eq!(hidden, "😊\u{E0138}\u{E0159}");
/// assert_eq!(hidden.chars().count(), 3);
/// ```
pub fn encode(carrier: char, data: &[u8]) -> String {
    let mut result = String::with_capacity(carrier.len_utf8() + data.len() * SELECTOR_UTF8_LEN);
    result.push(carrier);
    result.extend(data.iter().copied().map(selector_for_byte));
    result
}

/// Encodes the UTF-8 bytes of `message` behind `carrier`.
pub fn encode_text(carrier: char, message: &str) -> String {
    encode(carrier, message.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::selector::{decode_symbol, HIGH_BASE, LOW_BASE};

    #[test]
    fn test_empty_payload_is_carrier_only() {
        assert_eq!(encode('X', &[]), "X");
        assert_eq!(encode('😊', b""), "😊");
    }

    #[test]
    fn test_carrier_comes_first() {
        let encoded = encode('#', &[1, 2, 3]);
        assert_eq!(encoded.chars().next(), Some('#'));
        assert_eq!(encoded.chars().count(), 4);
    }

    #[test]
    fn test_selectors_follow_payload_order() {
        let data = [0u8, 15, 16, 255];
        let encoded = encode('a', &data);

        let payload: Vec<char> = encoded.chars().skip(1).collect();
        assert_eq!(
            payload,
            vec![
                char::from_u32(LOW_BASE).unwrap(),
                char::from_u32(LOW_BASE + 15).unwrap(),
                char::from_u32(HIGH_BASE).unwrap(),
                char::from_u32(HIGH_BASE + 239).unwrap(),
            ]
        );

        let bytes: Vec<u8> = payload.into_iter().map(|c| decode_symbol(c).unwrap()).collect();
        assert_eq!(bytes, data);
    }

    #[test]
    fn test_hi_on_smiley() {
        // 'H' = 72 and 'i' = 105 both land in the high block.
        let encoded = encode_text('😊', "Hi");
        let chars: Vec<char> = encoded.chars().collect();
        assert_eq!(chars, vec!['😊', '\u{E0138}', '\u{E0159}']);
    }

    #[test]
    fn test_capacity_is_sufficient() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode('😊', &data);
        assert!(encoded.len() <= '😊'.len_utf8() + data.len() * SELECTOR_UTF8_LEN);
    }
}
