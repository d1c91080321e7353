//! Conversion of buffer contents from and to printable text.

use bitstash_text::Encoding;
use bitstash_utils::tracing::debug;

use crate::{BitBuffer, Result};

impl BitBuffer {
    /// Creates a buffer from text produced by [`BitBuffer::to_text`]
    /// with the same `encoding`.
    ///
    /// The size is the decoded payload length in bits, including any
    /// zero bits that padded the source buffer to a whole byte.
    pub fn from_text(encoding: Encoding, text: &str) -> Result<Self> {
        let bytes = encoding.decode(text)?;
        debug!(
            encoding = encoding.name(),
            chars = text.len(),
            bytes = bytes.len(),
            "decoded text payload"
        );

        Ok(Self::from_bytes(bytes))
    }

    /// Encodes the written bits as text.
    ///
    /// A trailing partial byte is padded with zero bits first.
    pub fn to_text(&self, encoding: Encoding) -> String {
        let bytes = self.to_bytes();
        let text = encoding.encode(&bytes);
        debug!(
            encoding = encoding.name(),
            bytes = bytes.len(),
            chars = text.len(),
            "encoded text payload"
        );

        text
    }

    /// Creates a buffer from padded Base64 text.
    #[inline]
    pub fn from_base64(text: &str) -> Result<Self> {
        Self::from_text(Encoding::Base64, text)
    }

    /// Creates a buffer from basE91 text.
    #[inline]
    pub fn from_base91(text: &str) -> Result<Self> {
        Self::from_text(Encoding::Base91, text)
    }

    /// Creates a buffer from Base128 text.
    #[inline]
    pub fn from_base128(text: &str) -> Result<Self> {
        Self::from_text(Encoding::Base128, text)
    }

    /// Encodes the written bits as padded Base64.
    #[inline]
    pub fn to_base64(&self) -> String {
        self.to_text(Encoding::Base64)
    }

    /// Encodes the written bits as basE91.
    ///
    /// This is the densest printable encoding available.
    #[inline]
    pub fn to_base91(&self) -> String {
        self.to_text(Encoding::Base91)
    }

    /// Encodes the written bits as Base128.
    #[inline]
    pub fn to_base128(&self) -> String {
        self.to_text(Encoding::Base128)
    }
}
