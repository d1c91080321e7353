//! The basE91 encoding.
//!
//! Input bits are consumed LSB first in groups of 13 or 14 bits.
//! Every group is written as a pair of characters from a 91-symbol
//! alphabet, giving roughly 6.5 bits per character (about 23%
//! overhead, compared to Base64's 33%).
//!
//! A 13-bit group `v` can take values up to 8191, but two base-91
//! digits can express up to 8280. The encoder uses that slack: if
//! `v <= 88`, it adds a 14th bit to the group instead (the result
//! still stays below 8281). The decoder checks the same threshold on
//! the low 13 bits of every pair it reads. Both sides must agree on
//! it exactly. If they don't, later bytes decode wrong and nothing
//! reports an error.
//!
//! [`Encoder`] and [`Decoder`] expose the underlying state machine
//! for streaming use; [`encode`] and [`decode`] are one-shot
//! conveniences built on top of them.

use crate::{DecodeError, Result};

/// The ordered set of output characters.
pub const ALPHABET: &[u8; 91] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

const INVALID: u8 = u8::MAX;

// Maps ASCII characters to their index in `ALPHABET`.
static DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];

    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }

    table
};

// Groups whose low 13 bits are at or below this value take a 14th bit.
const THRESHOLD: u32 = 88;

const BASE: u32 = ALPHABET.len() as u32;

/// Estimates the number of characters produced for `len` bytes.
///
/// This never underestimates and is mainly useful for reserving
/// output capacity.
#[inline]
pub const fn encoded_len_hint(len: usize) -> usize {
    // Worst case is 13 bits per character pair.
    (len * 8).div_ceil(13) * 2 + 2
}

/// A streaming basE91 encoder.
///
/// Bytes are fed one at a time. At most 21 bits are held at any
/// point. Once all input is consumed, [`Encoder::finish`] flushes
/// the bits that do not fill a complete group.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    queue: u32,
    nbits: u32,
}

impl Encoder {
    /// Creates an encoder in its empty state.
    pub const fn new() -> Self {
        Self { queue: 0, nbits: 0 }
    }

    /// Encodes `byte` and appends any completed characters to `out`.
    #[inline]
    pub fn feed(&mut self, byte: u8, out: &mut String) {
        self.queue |= (byte as u32) << self.nbits;
        self.nbits += 8;

        if self.nbits > 13 {
            let mut value = self.queue & 0x1FFF;
            if value > THRESHOLD {
                self.queue >>= 13;
                self.nbits -= 13;
            } else {
                value = self.queue & 0x3FFF;
                self.queue >>= 14;
                self.nbits -= 14;
            }

            push_pair(out, value);
        }
    }

    /// Encodes every byte in `buf`, appending the output to `out`.
    pub fn feed_slice(&mut self, buf: &[u8], out: &mut String) {
        buf.iter().for_each(|&b| self.feed(b, out));
    }

    /// Flushes the remaining bits and consumes the encoder.
    ///
    /// Emits nothing when the input was a whole number of groups,
    /// otherwise one or two characters.
    pub fn finish(self, out: &mut String) {
        if self.nbits > 0 {
            out.push(ALPHABET[(self.queue % BASE) as usize] as char);
            if self.nbits > 7 || self.queue > BASE - 1 {
                out.push(ALPHABET[(self.queue / BASE) as usize] as char);
            }
        }
    }
}

#[inline]
fn push_pair(out: &mut String, value: u32) {
    out.push(ALPHABET[(value % BASE) as usize] as char);
    out.push(ALPHABET[(value / BASE) as usize] as char);
}

/// A streaming basE91 decoder.
///
/// Characters are fed one at a time and decoded in pairs. Every
/// complete pair yields 13 or 14 bits, from which whole bytes are
/// emitted immediately. [`Decoder::finish`] resolves a trailing
/// single character.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    queue: u32,
    nbits: u32,
    // First character of the pair currently being decoded.
    pending: Option<u32>,
    position: usize,
}

impl Decoder {
    /// Creates a decoder in its empty state.
    pub const fn new() -> Self {
        Self {
            queue: 0,
            nbits: 0,
            pending: None,
            position: 0,
        }
    }

    /// Decodes `c` and appends any completed bytes to `out`.
    ///
    /// Fails when `c` is not part of [`ALPHABET`]; the decoder is
    /// left unchanged in that case.
    pub fn feed(&mut self, c: char, out: &mut Vec<u8>) -> Result<()> {
        let digit = lookup(c).ok_or(DecodeError::InvalidCharacter {
            character: c,
            position: self.position,
        })?;
        self.position += 1;

        match self.pending.take() {
            None => self.pending = Some(digit),
            Some(low) => {
                let value = low + digit * BASE;

                self.queue |= value << self.nbits;
                self.nbits += if value & 0x1FFF > THRESHOLD { 13 } else { 14 };

                while self.nbits > 7 {
                    out.push(self.queue as u8);
                    self.queue >>= 8;
                    self.nbits -= 8;
                }
            }
        }

        Ok(())
    }

    /// Flushes a trailing single character and consumes the decoder.
    ///
    /// Bits left over from complete pairs are zero padding from the
    /// encoder's final flush and are discarded.
    pub fn finish(self, out: &mut Vec<u8>) {
        if let Some(low) = self.pending {
            out.push((self.queue | low << self.nbits) as u8);
        }
    }
}

#[inline]
fn lookup(c: char) -> Option<u32> {
    let idx = DECODE_TABLE.get(c as usize).copied()?;
    (idx != INVALID).then_some(idx as u32)
}

/// Encodes `data` to basE91.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len_hint(data.len()));

    let mut encoder = Encoder::new();
    encoder.feed_slice(data, &mut out);
    encoder.finish(&mut out);

    out
}

/// Decodes basE91 `text`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * 14 / 16 + 1);

    let mut decoder = Decoder::new();
    for c in text.chars() {
        decoder.feed(c, &mut out)?;
    }
    decoder.finish(&mut out);

    Ok(out)
}
