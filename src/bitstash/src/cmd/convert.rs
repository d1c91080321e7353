use anyhow::Context;
use clap::Args;

use super::{Command, Format};
use crate::cli::{io, HYPHEN};

/// Subcommand for transcoding a payload between formats.
#[derive(Debug, Args)]
pub struct Convert {
    /// The format of the input payload.
    #[clap(value_enum)]
    from: Format,

    /// The format to produce.
    #[clap(value_enum)]
    to: Format,

    /// Path to the input file, or "-" to read from stdin.
    #[clap(default_value = HYPHEN)]
    input: String,
}

impl Command for Convert {
    fn handle(self) -> anyhow::Result<()> {
        let data = io::read_input(&self.input)?;
        let buf = self
            .from
            .load(data)
            .with_context(|| format!("input is not valid {:?}", self.from))?;

        log::debug!("Loaded {} bits from '{}'", buf.len(), self.input);

        io::write_output(&self.to.store(buf))
    }
}
