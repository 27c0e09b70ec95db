pub mod chain;
pub mod codon;
pub mod counts;
pub mod dna;
pub mod frame;
pub mod protein;
pub mod record;
pub mod rna;
pub mod traits;
pub mod translation;


pub use chain::{classify_chains, ChainKind, ClassifiedChain, FrameChains, OLIGOPEPTIDE_MAX_LEN};
pub use dna::DnaSeq;
pub use frame::{Frame, Strand, FRAME_COUNT};
pub use protein::ProteinSeq;
pub use record::SeqRecord;
pub use rna::RnaSeq;
pub use translation::{Translation, TranslationResult};

use crate::alphabets::Alphabet;
use crate::error::{BioError, BioResult};
use crate::io::detect::detect_seq_kind;
use traits::SeqBytes;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Dna,
    Rna,
    Protein,
}

impl fmt::Display for SeqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeqKind::Dna => "DNA",
            SeqKind::Rna => "RNA",
            SeqKind::Protein => "protein",
        })
    }
}

/// Any of the three sequence kinds, for input whose kind is only known at
/// runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sequence {
    Dna(DnaSeq),
    Rna(RnaSeq),
    Protein(ProteinSeq),
}

impl Sequence {
    /// Build the variant picked by [`detect_seq_kind`].
    pub fn detect(bytes: Vec<u8>) -> BioResult<Self> {
        match detect_seq_kind(&bytes) {
            SeqKind::Dna => DnaSeq::new(bytes).map(Sequence::Dna),
            SeqKind::Rna => RnaSeq::new(bytes).map(Sequence::Rna),
            SeqKind::Protein => ProteinSeq::new(bytes).map(Sequence::Protein),
        }
    }

    pub fn kind(&self) -> SeqKind {
        match self {
            Sequence::Dna(_) => SeqKind::Dna,
            Sequence::Rna(_) => SeqKind::Rna,
            Sequence::Protein(_) => SeqKind::Protein,
        }
    }

    /// DNA is transcribed, RNA is returned unchanged.
    pub fn transcribe(&self) -> BioResult<RnaSeq> {
        match self {
            Sequence::Dna(dna) => Ok(dna.transcribe()),
            Sequence::Rna(rna) => Ok(rna.transcribe()),
            Sequence::Protein(_) => Err(BioError::UnexpectedKind {
                expected: SeqKind::Dna,
                found: SeqKind::Protein,
            }),
        }
    }

    /// Only mRNA is translated; DNA must be transcribed first.
    pub fn translate(&self) -> BioResult<Translation> {
        match self {
            Sequence::Rna(rna) => Ok(rna.translate()),
            other => Err(BioError::UnexpectedKind {
                expected: SeqKind::Rna,
                found: other.kind(),
            }),
        }
    }
}

impl SeqBytes for Sequence {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Sequence::Dna(s) => s.as_bytes(),
            Sequence::Rna(s) => s.as_bytes(),
            Sequence::Protein(s) => s.as_bytes(),
        }
    }

    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self> {
        Sequence::detect(bytes)
    }

    fn alphabet(&self) -> Alphabet {
        match self {
            Sequence::Dna(s) => s.alphabet(),
            Sequence::Rna(s) => s.alphabet(),
            Sequence::Protein(s) => s.alphabet(),
        }
    }
}

impl From<DnaSeq> for Sequence {
    fn from(seq: DnaSeq) -> Self {
        Sequence::Dna(seq)
    }
}

impl From<RnaSeq> for Sequence {
    fn from(seq: RnaSeq) -> Self {
        Sequence::Rna(seq)
    }
}

impl From<ProteinSeq> for Sequence {
    fn from(seq: ProteinSeq) -> Self {
        Sequence::Protein(seq)
    }
}
