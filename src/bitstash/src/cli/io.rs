use std::{
    fs,
    io::{self, Read, Write},
};

use anyhow::Context;

use super::HYPHEN;

/// Reads the whole input, either from stdin when `input` is "-" or
/// from the file at the given path.
pub fn read_input(input: &str) -> anyhow::Result<Vec<u8>> {
    if input == HYPHEN {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("failed to read '{input}'"))
    }
}

/// Writes `data` to stdout.
pub fn write_output(data: &[u8]) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(data)?;
    stdout.flush()?;

    Ok(())
}
