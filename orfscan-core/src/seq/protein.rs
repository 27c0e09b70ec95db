use crate::alphabets::{protein, Alphabet};
use crate::error::BioResult;
use crate::seq::traits::SeqBytes;
use std::fmt;

/// Amino-acid chain, possibly carrying `*` stop markers.
///
/// Ordering is lexicographic over the residue bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        protein::alphabet().validate(&bytes)?;
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl SeqBytes for ProteinSeq {
    fn as_bytes(&self) -> &[u8] {
        ProteinSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self> {
        ProteinSeq::new(bytes)
    }

    fn alphabet(&self) -> Alphabet {
        protein::alphabet()
    }
}
