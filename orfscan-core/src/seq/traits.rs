use crate::alphabets::Alphabet;
use crate::error::BioResult;
use crate::seq::counts::{self, SymbolCounts, SymbolFrequencies};

pub trait SeqBytes: Clone + Sized {
    fn as_bytes(&self) -> &[u8];
    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self>;

    /// The alphabet this sequence was validated against.
    fn alphabet(&self) -> Alphabet;

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    fn counts(&self) -> SymbolCounts {
        counts::symbol_counts(self.as_bytes(), &self.alphabet())
    }

    fn frequencies(&self) -> SymbolFrequencies {
        counts::symbol_frequencies(&self.counts(), self.len())
    }
}
