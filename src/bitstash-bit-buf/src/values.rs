//! Fixed-width value encoding on top of the bit primitives.

use bitstash_utils::bitint::{sign_extend, sign_unextend};

use crate::{buffer::check_width, BitBuffer, Result};

impl BitBuffer {
    /// Writes `value` as an unsigned integer of `width` bits.
    ///
    /// Bits of `value` above `width` are silently dropped, so a
    /// value too large for its field is truncated rather than
    /// rejected. Fails when `width` is outside `1..=64`.
    #[inline]
    pub fn write_uint(&mut self, width: usize, value: u64) -> Result<()> {
        self.write_bitint(value, width)
    }

    /// Reads an unsigned integer of `width` bits, if possible.
    #[inline]
    pub fn read_uint(&mut self, width: usize) -> Result<u64> {
        self.read_bitint(width)
    }

    /// Reads an unsigned integer of `width` bits without advancing
    /// the cursor, if possible.
    #[inline]
    pub fn peek_uint(&self, width: usize) -> Result<u64> {
        self.peek_bitint(width)
    }

    /// Writes `value` as a two's complement integer of `width` bits.
    ///
    /// Values outside the range of a `width`-bit signed integer are
    /// truncated like [`BitBuffer::write_uint`] does.
    #[inline]
    pub fn write_int(&mut self, width: usize, value: i64) -> Result<()> {
        check_width::<u64>(width)?;
        self.put(sign_unextend(value, width as u32), width);
        Ok(())
    }

    /// Reads a two's complement integer of `width` bits, if possible.
    ///
    /// The field's most significant bit is treated as the sign.
    #[inline]
    pub fn read_int(&mut self, width: usize) -> Result<i64> {
        self.read_uint(width).map(|v| sign_extend(v, width as u32))
    }

    /// Writes a [`bool`] as a single bit.
    #[inline]
    pub fn write_bool(&mut self, v: bool) {
        self.write_bit(v);
    }

    /// Reads a [`bool`] from a single bit, if possible.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_bit()
    }

    /// Writes a single character code as an 8-bit field.
    #[inline]
    pub fn write_char(&mut self, v: u8) {
        self.put(v, u8::BITS as usize);
    }

    /// Reads a single character code from an 8-bit field, if possible.
    #[inline]
    pub fn read_char(&mut self) -> Result<u8> {
        self.take(u8::BITS as usize)
    }

    /// Writes the IEEE-754 bit pattern of an [`f32`] value.
    #[inline]
    pub fn write_f32(&mut self, v: f32) {
        self.put(v.to_bits(), u32::BITS as usize);
    }

    /// Reads an [`f32`] value from its IEEE-754 bit pattern, if possible.
    ///
    /// The bits are reinterpreted exactly, including NaN payloads.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.take(u32::BITS as usize).map(f32::from_bits)
    }

    /// Writes the IEEE-754 bit pattern of an [`f64`] value.
    #[inline]
    pub fn write_f64(&mut self, v: f64) {
        self.put(v.to_bits(), u64::BITS as usize);
    }

    /// Reads an [`f64`] value from its IEEE-754 bit pattern, if possible.
    ///
    /// The bits are reinterpreted exactly, including NaN payloads.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.take(u64::BITS as usize).map(f64::from_bits)
    }
}
