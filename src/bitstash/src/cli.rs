use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub mod io;

pub const HYPHEN: &str = "-";

/// The CLI interface for the bitstash application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: BitstashCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by bitstash.
#[derive(Debug, Subcommand)]
pub enum BitstashCommand {
    Convert(convert::Convert),
    Info(info::Info),
}

impl Command for BitstashCommand {
    fn handle(self) -> anyhow::Result<()> {
        match self {
            Self::Convert(convert) => convert.handle(),
            Self::Info(info) => info.handle(),
        }
    }
}
