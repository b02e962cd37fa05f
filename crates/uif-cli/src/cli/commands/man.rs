//! Man command: render the roff man page.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;
use std::io::Write;

use crate::cli::Cli;

/// Render the man page for the top-level command to stdout.
pub fn run_man() -> Result<()> {
    let man = Man::new(Cli::command());
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    std::io::stdout().write_all(&buf)?;
    Ok(())
}
