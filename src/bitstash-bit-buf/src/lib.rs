//! Provides a buffer for dense bit-level serialization and
//! deserialization of data.
//!
//! Values are packed back-to-back without any alignment or
//! padding. Every field is stored MSB first, and the first bit of
//! the stream is the MSB of the first byte when the buffer is
//! exported. A trailing partial byte is zero-padded.
//!
//! The format is positional and not self-describing: a field must
//! be read with the same width and type it was written with, in the
//! same order. Mismatches are not detected and yield wrong values.
//!
//! The exported bytes can be converted to printable text with any
//! of the [`Encoding`]s, see [`BitBuffer::to_text`].

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use bitstash_text::Encoding;

mod buffer;
pub use buffer::BitBuffer;

mod error;
pub use error::{Error, Result};

mod text;
mod values;
mod variable;
