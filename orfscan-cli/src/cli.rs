use clap::Parser;
use log::Level;
use orfscan_core::error::BioError;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::MIN_THREADS;

#[derive(Debug, Parser)]
#[command(
    name = "orfscan",
    version,
    about = "Six-frame translation and protein/oligopeptide calling for FASTA records"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "input",
        required = true,
        value_name = "PATH",
        help = "Path to a FASTA file with DNA or mRNA records"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the report to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "threads",
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get()
    )]
    pub threads: usize,

    #[arg(
        short = 'm',
        long = "min-length",
        help = "Omit chains shorter than this from the report",
        value_name = "LENGTH",
        default_value_t = 1
    )]
    pub min_length: usize,

    #[arg(
        short = 'c',
        long = "counts",
        help = "Also report base counts per record",
        default_value_t = false
    )]
    pub counts: bool,

    #[arg(
        short = 'L',
        long = "level",
        help = "Log level",
        value_name = "LEVEL",
        default_value_t = Level::Info
    )]
    pub level: Level,
}

impl Args {
    pub fn check(&self) -> Result<(), CliError> {
        validate(&self.input)?;

        if self.threads < MIN_THREADS {
            return Err(CliError::InvalidInput(format!(
                "threads must be at least {}, got {}",
                MIN_THREADS, self.threads
            )));
        }

        if self.output.is_none() {
            log::debug!("No output path provided. Writing to stdout...");
        }

        Ok(())
    }
}

/// error handling for CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Sequence error: {0}")]
    BioError(#[from] BioError),
}

/// argument validation
pub fn validate(arg: &Path) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!("{:?} does not exist", arg)));
    }

    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!("{:?} is not a file", arg)));
    }

    Ok(())
}
