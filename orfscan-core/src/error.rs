use std::io;
use thiserror::Error;

use crate::seq::SeqKind;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid base '{ch}' at position {pos}")]
    InvalidBase { ch: char, pos: usize },

    #[error("invalid frame: {frame} (must be 0, 1, or 2)")]
    InvalidFrame { frame: usize },

    #[error("expected {expected} sequence, got {found}")]
    UnexpectedKind { expected: SeqKind, found: SeqKind },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),
}

pub type BioResult<T> = Result<T, BioError>;
