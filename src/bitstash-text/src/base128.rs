//! A 7-bit encoding over 128 printable characters.
//!
//! Input bytes are read MSB first and cut into 7-bit groups; each
//! group becomes one character of [`ALPHABET`]: the 94 printable
//! ASCII characters `!` through `~`, followed by the 34 Latin-1
//! letters `U+00C0` through `U+00E1`. The output never contains
//! whitespace or control characters. Latin-1 letters take two bytes
//! in UTF-8, so the output is counted in characters, not bytes.
//!
//! `n` bytes produce `ceil(8n / 7)` characters, with the final group
//! zero-padded on the right. The decoder rejects character counts
//! that no byte length produces and non-zero padding bits.

use bitstash_utils::bitmask;

use crate::{DecodeError, Result};

const GROUP_BITS: u32 = 7;

const ASCII_START: u32 = '!' as u32;
const ASCII_LEN: u32 = ('~' as u32) - ASCII_START + 1;
const LATIN1_START: u32 = 0xC0;

/// The ordered set of output characters.
pub const ALPHABET: [char; 128] = {
    let mut alphabet = ['\0'; 128];

    let mut i = 0;
    while i < alphabet.len() {
        let idx = i as u32;
        let code = if idx < ASCII_LEN {
            ASCII_START + idx
        } else {
            LATIN1_START + idx - ASCII_LEN
        };

        alphabet[i] = match char::from_u32(code) {
            Some(c) => c,
            None => panic!("alphabet code point out of range"),
        };
        i += 1;
    }

    alphabet
};

const INVALID: u8 = u8::MAX;
const TABLE_LEN: usize = (LATIN1_START + 128 - ASCII_LEN) as usize;

// Maps code points to their index in `ALPHABET`.
static DECODE_TABLE: [u8; TABLE_LEN] = {
    let mut table = [INVALID; TABLE_LEN];

    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }

    table
};

#[inline]
fn lookup(c: char) -> Option<u32> {
    let idx = DECODE_TABLE.get(c as usize).copied()?;
    (idx != INVALID).then_some(idx as u32)
}

/// Gets the exact number of characters produced for `len` bytes.
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    (len * u8::BITS as usize).div_ceil(GROUP_BITS as usize)
}

/// Encodes `data` to Base128.
pub fn encode(data: &[u8]) -> String {
    // Reserve for the worst case of two UTF-8 bytes per character.
    let mut out = String::with_capacity(encoded_len(data.len()) * 2);

    let mut queue = 0u32;
    let mut nbits = 0;
    for &b in data {
        queue = (queue << 8) | b as u32;
        nbits += 8;

        while nbits >= GROUP_BITS {
            nbits -= GROUP_BITS;
            out.push(ALPHABET[((queue >> nbits) & 0x7F) as usize]);
        }
        queue &= bitmask!(nbits) as u32;
    }

    if nbits > 0 {
        out.push(ALPHABET[((queue << (GROUP_BITS - nbits)) & 0x7F) as usize]);
    }

    out
}

/// Decodes Base128 `text`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * GROUP_BITS as usize / 8);

    let mut queue = 0u32;
    let mut nbits = 0;
    let mut len = 0;
    for (position, c) in text.chars().enumerate() {
        let digit = lookup(c).ok_or(DecodeError::InvalidCharacter {
            character: c,
            position,
        })?;

        queue = (queue << GROUP_BITS) | digit;
        nbits += GROUP_BITS;
        len += 1;

        if nbits >= u8::BITS {
            nbits -= u8::BITS;
            out.push((queue >> nbits) as u8);
        }
        queue &= bitmask!(nbits) as u32;
    }

    // A whole group of leftover bits is never produced by the encoder.
    if nbits >= GROUP_BITS {
        return Err(DecodeError::InvalidLength { len });
    }
    if queue != 0 {
        return Err(DecodeError::TrailingBits { position: len - 1 });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_unique_and_printable() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert!(!c.is_control() && !c.is_whitespace(), "{c:?}");
            assert_eq!(lookup(c), Some(i as u32));
        }

        assert_eq!(ALPHABET[0], '!');
        assert_eq!(ALPHABET[93], '~');
        assert_eq!(ALPHABET[94], '\u{C0}');
        assert_eq!(ALPHABET[127], '\u{E1}');

        let valid = DECODE_TABLE.iter().filter(|&&v| v != INVALID).count();
        assert_eq!(valid, 128);
    }

    #[test]
    fn msb_first_groups() {
        // 1111_1111 -> 1111111 1(000000)
        assert_eq!(encode(&[0xFF]), format!("{}{}", ALPHABET[0x7F], ALPHABET[0x40]));
        // 1000_0000 0000_0001 -> 1000000 0000000 01(00000)
        assert_eq!(
            encode(&[0x80, 0x01]),
            format!("{}{}{}", ALPHABET[0x40], ALPHABET[0], ALPHABET[0x20])
        );
    }

    #[test]
    fn exact_lengths() {
        for len in 0..64 {
            let data = vec![0xA5; len];
            assert_eq!(encode(&data).chars().count(), encoded_len(len));
        }
    }

    #[test]
    fn rejects_impossible_lengths() {
        assert_eq!(decode("!"), Err(DecodeError::InvalidLength { len: 1 }));

        // 8 characters hold 56 bits, 7 full bytes; a 9th adds a whole group.
        let text = "!".repeat(9);
        assert_eq!(decode(&text), Err(DecodeError::InvalidLength { len: 9 }));
    }

    #[test]
    fn rejects_trailing_bits() {
        // The second character only has one payload bit, the rest is padding.
        let text = format!("{}{}", ALPHABET[0x7F], ALPHABET[0x41]);
        assert_eq!(
            decode(&text),
            Err(DecodeError::TrailingBits { position: 1 })
        );

        let text = format!("{}{}", ALPHABET[0x7F], ALPHABET[0x40]);
        assert_eq!(decode(&text), Ok(vec![0xFF]));
    }
}
