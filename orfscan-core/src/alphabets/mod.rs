pub mod dna;
pub mod protein;
pub mod rna;

use bit_set::BitSet;
use std::borrow::Borrow;

use crate::error::{BioError, BioResult};

#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// Fails with the position of the first byte outside the alphabet.
    pub fn validate(&self, text: &[u8]) -> BioResult<()> {
        match text.iter().position(|&b| !self.contains(b)) {
            Some(pos) => Err(BioError::InvalidBase {
                ch: text[pos] as char,
                pos,
            }),
            None => Ok(()),
        }
    }

    /// Symbols in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols.iter().map(|a| a as u8)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
