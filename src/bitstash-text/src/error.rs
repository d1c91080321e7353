/// A [`Result`][std::result::Result] produced by the decoders
/// of this crate.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that occur when decoding text which was not produced
/// by the matching encoder.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character outside of the encoding's alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The input length cannot be produced by the encoder.
    #[error("invalid input length {len}")]
    InvalidLength { len: usize },

    /// Padding characters in the wrong place or amount.
    #[error("invalid padding")]
    InvalidPadding,

    /// The final symbol carries bits that are not part of the payload.
    #[error("non-zero trailing bits in symbol at position {position}")]
    TrailingBits { position: usize },
}
