use bitstash_text::DecodeError;

/// A [`Result`][std::result::Result] produced by
/// [`BitBuffer`][crate::BitBuffer] operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when accessing a [`BitBuffer`][crate::BitBuffer].
///
/// Values which do not fit their declared field width are not an
/// error; they are truncated to the field's low bits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field width outside of what the target type can hold.
    #[error("bit width {width} is outside the supported range 1..={max}")]
    InvalidWidth { width: usize, max: u32 },

    /// A cursor position or read beyond the written bits.
    #[error("bit position {position} is out of bounds for buffer of {size} bits")]
    OutOfBounds { position: usize, size: usize },

    /// A string too long for its 32-bit length prefix.
    #[error("string of {len} bytes exceeds the length prefix")]
    StringTooLong { len: usize },

    /// A string that was expected to be UTF-8 but is not.
    #[error("string data is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Malformed text input.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
