//! Printable text encodings for binary payloads.
//!
//! Serialized data frequently has to travel through channels which
//! only accept text. This crate maps arbitrary bytes to strings and
//! back, offering three encodings with different trade-offs between
//! density and alphabet:
//!
//! - [`base64`]: the standard RFC 4648 encoding with `=` padding.
//! - [`base91`]: a basE91 encoding which packs 13 or 14 bits into
//!   every pair of output characters.
//! - [`base128`]: 7 bits per character from a printable 128-symbol set.
//!
//! None of the encodings carry a header; the text is an opaque
//! payload and the decoder has to be told which encoding produced it.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod base128;
pub mod base64;
pub mod base91;

mod error;
pub use error::{DecodeError, Result};

/// The text encodings supported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// See [`base64`].
    Base64,
    /// See [`base91`].
    Base91,
    /// See [`base128`].
    Base128,
}

impl Encoding {
    /// All supported encodings, ordered by density.
    pub const ALL: [Self; 3] = [Self::Base64, Self::Base91, Self::Base128];

    /// Gets a short, human-readable name of the encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Base91 => "base91",
            Self::Base128 => "base128",
        }
    }

    /// Encodes `data` into a string.
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Self::Base64 => base64::encode(data),
            Self::Base91 => base91::encode(data),
            Self::Base128 => base128::encode(data),
        }
    }

    /// Decodes `text` back into the bytes it was produced from.
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Base64 => base64::decode(text),
            Self::Base91 => base91::decode(text),
            Self::Base128 => base128::decode(text),
        }
    }
}
