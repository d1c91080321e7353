//! Shared code for the bitstash project.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tracing;

pub mod bitint;
pub mod mem;
