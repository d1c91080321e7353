//! Standard Base64 as described by RFC 4648.
//!
//! Output is always padded with `=` to a multiple of 4 characters
//! and the decoder requires that padding to be present.

use ::base64::{engine::general_purpose::STANDARD, DecodeError as RawError, Engine as _};

use crate::{DecodeError, Result};

/// Encodes `data` to padded Base64.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes padded Base64 `text`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|e| match e {
        RawError::InvalidByte(offset, byte) => invalid_character(text, offset, byte),
        RawError::InvalidLength(len) => DecodeError::InvalidLength { len },
        RawError::InvalidLastSymbol(offset, _) => DecodeError::TrailingBits {
            position: char_position(text, offset),
        },
        RawError::InvalidPadding => DecodeError::InvalidPadding,
    })
}

// Converts a byte offset reported by the engine into a character index.
fn char_position(text: &str, offset: usize) -> usize {
    text.get(..offset)
        .map(|s| s.chars().count())
        .unwrap_or(offset)
}

fn invalid_character(text: &str, offset: usize, byte: u8) -> DecodeError {
    let character = text
        .get(offset..)
        .and_then(|s| s.chars().next())
        .unwrap_or(byte as char);

    DecodeError::InvalidCharacter {
        character,
        position: char_position(text, offset),
    }
}
