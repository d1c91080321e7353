use bitstash_bit_buf::{BitBuffer, Encoding};
use clap::ValueEnum;

pub mod convert;
pub mod info;

/// A command that can be executed from the CLI.
pub trait Command {
    /// Runs the command to completion.
    fn handle(self) -> anyhow::Result<()>;
}

/// The payload formats understood by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Raw bytes, without any text encoding.
    Raw,
    /// Padded RFC 4648 Base64.
    Base64,
    /// basE91.
    Base91,
    /// Base128 over printable ASCII and Latin-1 letters.
    Base128,
}

impl Format {
    fn encoding(self) -> Option<Encoding> {
        match self {
            Self::Raw => None,
            Self::Base64 => Some(Encoding::Base64),
            Self::Base91 => Some(Encoding::Base91),
            Self::Base128 => Some(Encoding::Base128),
        }
    }

    /// Loads a buffer from input data in this format.
    pub fn load(self, data: Vec<u8>) -> anyhow::Result<BitBuffer> {
        let Some(encoding) = self.encoding() else {
            return Ok(BitBuffer::from_bytes(data));
        };

        let text = String::from_utf8(data)?;
        Ok(BitBuffer::from_text(encoding, text.trim_end())?)
    }

    /// Stores a buffer in this format.
    pub fn store(self, buf: BitBuffer) -> Vec<u8> {
        match self.encoding() {
            None => buf.into_bytes(),
            Some(encoding) => {
                let mut text = buf.to_text(encoding);
                text.push('\n');
                text.into_bytes()
            }
        }
    }
}
