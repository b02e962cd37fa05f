//! CLI for the UIF image fetcher.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use uif_core::config;

use commands::{run_checksum, run_completions, run_fetch, run_man};

/// Top-level CLI for the UIF image fetcher.
#[derive(Debug, Parser)]
#[command(name = "uif")]
#[command(about = "UIF: mindful image fetcher for the web", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one or more images.
    Fetch {
        /// Direct HTTP/HTTPS URLs of the images.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Directory to store images in (default: Fetched_Images).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Store payloads whose content type is not a recognized image type,
        /// without asking.
        #[arg(long)]
        allow_unsafe_type: bool,

        /// Store payloads reported larger than 50 MB, without asking.
        #[arg(long)]
        allow_large: bool,

        /// Never prompt; treat unanswered questions as declined.
        #[arg(long)]
        no_input: bool,
    },

    /// Compute SHA-256 of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                urls,
                dir,
                allow_unsafe_type,
                allow_large,
                no_input,
            } => run_fetch(
                &cfg,
                &urls,
                dir.as_deref(),
                allow_unsafe_type,
                allow_large,
                no_input,
            )?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
