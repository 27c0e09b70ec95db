use crate::alphabets::{dna, Alphabet};
use crate::error::BioResult;
use crate::seq::rna::RnaSeq;
use crate::seq::traits::SeqBytes;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        dna::alphabet().validate(&bytes)?;
        Ok(Self { bytes })
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

    /// DNA -> mRNA: every `T` becomes `U`, order and length are kept.
    pub fn transcribe(&self) -> RnaSeq {
        RnaSeq::from_bytes_unchecked(dna::transcribe(self.as_bytes()))
    }
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        DnaSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self> {
        DnaSeq::new(bytes)
    }

    fn alphabet(&self) -> Alphabet {
        dna::alphabet()
    }
}
