use anyhow::Context;
use bitstash_text::Encoding;
use clap::Args;

use super::{Command, Format};
use crate::cli::{io, HYPHEN};

/// Subcommand for describing a payload and its encoded sizes.
#[derive(Debug, Args)]
pub struct Info {
    /// The format of the input payload.
    #[clap(value_enum)]
    from: Format,

    /// Path to the input file, or "-" to read from stdin.
    #[clap(default_value = HYPHEN)]
    input: String,
}

impl Command for Info {
    fn handle(self) -> anyhow::Result<()> {
        let data = io::read_input(&self.input)?;
        let buf = self
            .from
            .load(data)
            .with_context(|| format!("input is not valid {:?}", self.from))?;

        println!("size: {} bits ({} bytes)", buf.len(), buf.byte_len());
        for encoding in Encoding::ALL {
            let text = buf.to_text(encoding);
            println!("{}: {} chars", encoding.name(), text.len());
        }

        Ok(())
    }
}
