//! Variable-length data built from 8-bit fields.
//!
//! Bytes are not realigned to byte boundaries; they are packed at
//! the cursor like any other field.

use crate::{buffer::out_of_bounds, BitBuffer, Error, Result};

// Width of the length prefix in front of strings.
const STRING_PREFIX_BITS: usize = u32::BITS as usize;

impl BitBuffer {
    /// Writes every byte in `buf` as an 8-bit field.
    ///
    /// No length is recorded; the reader has to know it.
    pub fn write_bytes(&mut self, buf: &[u8]) {
        self.reserve(buf.len() * u8::BITS as usize);
        buf.iter().for_each(|&b| self.write_char(b));
    }

    /// Reads `count` 8-bit fields, if possible.
    ///
    /// Fails without consuming anything when fewer than `count`
    /// bytes remain.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let bits = count
            .checked_mul(u8::BITS as usize)
            .ok_or_else(|| out_of_bounds(usize::MAX, self.len()))?;
        self.ensure_readable(bits)?;

        (0..count).map(|_| self.read_char()).collect()
    }

    /// Writes a byte string prefixed with its length as a 32-bit
    /// unsigned integer.
    ///
    /// Fails for strings longer than [`u32::MAX`] bytes.
    pub fn write_string<S: AsRef<[u8]>>(&mut self, s: S) -> Result<()> {
        let s = s.as_ref();
        let len = u32::try_from(s.len()).map_err(|_| Error::StringTooLong { len: s.len() })?;

        self.put(len, STRING_PREFIX_BITS);
        self.write_bytes(s);

        Ok(())
    }

    /// Writes a UTF-8 string in the same format as
    /// [`BitBuffer::write_string`].
    #[inline]
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_string(s)
    }

    /// Reads a length-prefixed byte string, if possible.
    ///
    /// On failure, the cursor is left where it was before the call.
    pub fn read_string(&mut self) -> Result<Vec<u8>> {
        let start = self.cursor();
        let len: u32 = self.take(STRING_PREFIX_BITS)?;

        match self.read_bytes(len as usize) {
            Ok(s) => Ok(s),
            Err(e) => {
                self.rewind(start);
                Err(e)
            }
        }
    }

    /// Reads a length-prefixed string and validates it as UTF-8.
    ///
    /// On failure, the cursor is left where it was before the call.
    pub fn read_utf8(&mut self) -> Result<String> {
        let start = self.cursor();
        let s = self.read_string()?;

        String::from_utf8(s).map_err(|e| {
            self.rewind(start);
            Error::from(e)
        })
    }
}
