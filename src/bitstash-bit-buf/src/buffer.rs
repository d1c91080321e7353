use bitvec::prelude::*;
use bitstash_utils::{mem::bytes_for_bits, tracing::trace};
use funty::Integral;

use crate::{Error, Result};

#[cold]
#[inline(never)]
pub(crate) fn out_of_bounds(position: usize, size: usize) -> Error {
    Error::OutOfBounds { position, size }
}

#[inline]
pub(crate) fn check_width<I: Integral>(bits: usize) -> Result<()> {
    if 0 < bits && bits <= I::BITS as usize {
        Ok(())
    } else {
        Err(Error::InvalidWidth {
            width: bits,
            max: I::BITS,
        })
    }
}

/// A growable buffer which supports bit-based serialization and
/// deserialization of data.
///
/// The buffer tracks two positions: the *cursor*, where the next
/// read or write starts, and the *size*, the number of bits written
/// since creation or the last [`BitBuffer::reset`]. Writes at the
/// cursor extend the size when they run past it; reads never go
/// beyond it.
///
/// All reads and writes advance the cursor by the width of the
/// field. A failing operation leaves the cursor untouched.
#[derive(Clone, Debug, Default)]
pub struct BitBuffer {
    // Storage of all written bits; its length is the size.
    inner: BitVec<u8, Msb0>,
    cursor: usize,
}

impl BitBuffer {
    /// Creates a new, empty [`BitBuffer`].
    pub fn new() -> Self {
        Self {
            inner: BitVec::new(),
            cursor: 0,
        }
    }

    /// Creates a new, empty [`BitBuffer`] with room for at least
    /// `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            inner: BitVec::with_capacity(bits),
            cursor: 0,
        }
    }

    /// Creates a buffer over a copy of raw bytes.
    ///
    /// The size is the length of `buf` in bits and the cursor starts
    /// at the beginning.
    pub fn from_bytes<B: Into<Vec<u8>>>(buf: B) -> Self {
        Self {
            inner: BitVec::from_vec(buf.into()),
            cursor: 0,
        }
    }

    /// Returns the number of bits written to the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Indicates whether the buffer holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of bytes needed to hold all written bits.
    #[inline]
    pub fn byte_len(&self) -> usize {
        bytes_for_bits(self.len())
    }

    /// Returns the number of bits between the cursor and the end
    /// of the written data.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.len() - self.cursor
    }

    /// Gets the current cursor position in bits.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to bit `position`.
    ///
    /// `position` may be anywhere in `0..=self.len()`.
    pub fn set_cursor(&mut self, position: usize) -> Result<()> {
        if position <= self.len() {
            self.cursor = position;
            Ok(())
        } else {
            Err(out_of_bounds(position, self.len()))
        }
    }

    /// Moves the cursor back to the start without discarding data.
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Discards all written bits and resets the cursor.
    ///
    /// The allocated storage is kept for reuse.
    pub fn reset(&mut self) {
        self.inner.clear();
        self.cursor = 0;
    }

    /// Copies the written bits out as bytes.
    ///
    /// A trailing partial byte is padded with zero bits.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.inner.as_raw_slice().to_vec();
        mask_tail(&mut bytes, self.len());
        bytes
    }

    /// Consumes the buffer and returns the written bits as bytes.
    ///
    /// A trailing partial byte is padded with zero bits.
    pub fn into_bytes(self) -> Vec<u8> {
        let len = self.len();
        let mut bytes = self.inner.into_vec();
        mask_tail(&mut bytes, len);
        bytes
    }

    /// Writes a single bit at the cursor.
    #[inline]
    pub fn write_bit(&mut self, b: bool) {
        self.put(b as u8, 1);
    }

    /// Reads a single bit at the cursor, if possible.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        self.take::<u8>(1).map(|b| b != 0)
    }

    /// Writes the low `bits` bits of `value` at the cursor.
    ///
    /// Higher bits of `value` are silently dropped. Fails when `bits`
    /// is zero or larger than the bit size of `I`.
    #[inline]
    pub fn write_bitint<I: Integral>(&mut self, value: I, bits: usize) -> Result<()> {
        check_width::<I>(bits)?;
        self.put(value, bits);
        Ok(())
    }

    /// Reads a given number of bits at the cursor into an integer,
    /// if possible.
    #[inline]
    pub fn read_bitint<I: Integral>(&mut self, bits: usize) -> Result<I> {
        check_width::<I>(bits)?;
        self.take(bits)
    }

    /// Reads a given number of bits at the cursor into an integer,
    /// without advancing the cursor.
    #[inline]
    pub fn peek_bitint<I: Integral>(&self, bits: usize) -> Result<I> {
        check_width::<I>(bits)?;
        self.load(bits)
    }

    // Stores the low `bits` bits of `value` at the cursor, growing the
    // storage when necessary. `bits` must be a valid width for `I`.
    pub(crate) fn put<I: Integral>(&mut self, value: I, bits: usize) {
        let end = self.cursor + bits;
        if end > self.len() {
            self.grow(end);
        }

        self.inner[self.cursor..end].store_be(value);
        self.cursor = end;
    }

    // Loads `bits` bits from the cursor and advances past them.
    // `bits` must be a valid width for `I`.
    pub(crate) fn take<I: Integral>(&mut self, bits: usize) -> Result<I> {
        let value = self.load(bits)?;
        self.cursor += bits;
        Ok(value)
    }

    fn load<I: Integral>(&self, bits: usize) -> Result<I> {
        let end = self.cursor + bits;
        if end <= self.len() {
            Ok(self.inner[self.cursor..end].load_be())
        } else {
            Err(out_of_bounds(end, self.len()))
        }
    }

    // Moves the cursor back to a position it previously held.
    pub(crate) fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.cursor);
        self.cursor = position;
    }

    // Makes sure `bits` more bits can be read from the cursor.
    pub(crate) fn ensure_readable(&self, bits: usize) -> Result<()> {
        match self.cursor.checked_add(bits) {
            Some(end) if end <= self.len() => Ok(()),
            Some(end) => Err(out_of_bounds(end, self.len())),
            None => Err(out_of_bounds(usize::MAX, self.len())),
        }
    }

    // Reserves storage for `bits` more bits past the current size.
    pub(crate) fn reserve(&mut self, bits: usize) {
        self.inner.reserve(bits);
    }

    fn grow(&mut self, len: usize) {
        let capacity = self.inner.capacity();

        // The backing `Vec` grows geometrically.
        self.inner.resize(len, false);

        if self.inner.capacity() != capacity {
            trace!(
                from = capacity,
                to = self.inner.capacity(),
                "grew bit storage"
            );
        }
    }
}

impl From<Vec<u8>> for BitBuffer {
    fn from(buf: Vec<u8>) -> Self {
        Self::from_bytes(buf)
    }
}

impl From<&[u8]> for BitBuffer {
    fn from(buf: &[u8]) -> Self {
        Self::from_bytes(buf)
    }
}

// Drops storage past the last live byte and clears the unused low
// bits of a partial trailing byte.
fn mask_tail(bytes: &mut Vec<u8>, bits: usize) {
    bytes.truncate(bytes_for_bits(bits));

    let live = bits % u8::BITS as usize;
    if live != 0 {
        if let Some(last) = bytes.last_mut() {
            *last &= u8::MAX << (u8::BITS as usize - live);
        }
    }
}
