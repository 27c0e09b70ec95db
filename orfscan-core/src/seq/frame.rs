use crate::error::{BioError, BioResult};
use crate::seq::codon::{translate_codon, CODON_LEN};
use crate::seq::protein::ProteinSeq;
use crate::seq::rna::RnaSeq;
use std::fmt;

pub const FRAME_COUNT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

/// One of the six reading frames: a strand plus a codon offset in `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    pub strand: Strand,
    pub offset: usize,
}

impl Frame {
    /// Fixed frame order: +0, +1, +2, -0, -1, -2.
    pub const ALL: [Frame; FRAME_COUNT] = [
        Frame::new(Strand::Forward, 0),
        Frame::new(Strand::Forward, 1),
        Frame::new(Strand::Forward, 2),
        Frame::new(Strand::Reverse, 0),
        Frame::new(Strand::Reverse, 1),
        Frame::new(Strand::Reverse, 2),
    ];

    const fn new(strand: Strand, offset: usize) -> Self {
        Self { strand, offset }
    }

    /// 1-based frame number: 1..=3 forward, 4..=6 reverse.
    pub fn number(&self) -> usize {
        match self.strand {
            Strand::Forward => self.offset + 1,
            Strand::Reverse => self.offset + 4,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        };
        write!(f, "{}{}", sign, self.offset)
    }
}

/// Translate `bases` from `offset` in non-overlapping codons. Codons with no
/// entry in the table are skipped rather than reported.
pub fn translate_frame(bases: &[u8], offset: usize) -> BioResult<ProteinSeq> {
    if offset >= CODON_LEN {
        return Err(BioError::InvalidFrame { frame: offset });
    }
    Ok(translate_from(bases, offset))
}

fn translate_from(bases: &[u8], offset: usize) -> ProteinSeq {
    let Some(tail) = bases.get(offset..) else {
        return ProteinSeq::default();
    };
    let mut out = Vec::with_capacity(tail.len() / CODON_LEN);
    out.extend(tail.chunks_exact(CODON_LEN).filter_map(translate_codon));
    ProteinSeq::from_bytes_unchecked(out)
}

/// All six frame translations in `Frame::ALL` order.
pub fn six_frames(rna: &RnaSeq) -> [ProteinSeq; FRAME_COUNT] {
    let minus = rna.reverse_complement();
    std::array::from_fn(|i| {
        let frame = Frame::ALL[i];
        let strand = match frame.strand {
            Strand::Forward => rna.as_bytes(),
            Strand::Reverse => minus.as_bytes(),
        };
        translate_from(strand, frame.offset)
    })
}
