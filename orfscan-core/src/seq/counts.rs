use crate::alphabets::Alphabet;

use memchr::memchr_iter;
use vector_map::VecMap;

pub type SymbolCounts = VecMap<u8, usize>;
pub type SymbolFrequencies = VecMap<u8, f64>;

/// Occurrences of every symbol of `alphabet` in `hay`, zero counts included.
/// Bytes outside the alphabet are not counted.
pub fn symbol_counts(hay: &[u8], alphabet: &Alphabet) -> SymbolCounts {
    let mut counts = VecMap::new();
    for symbol in alphabet.iter() {
        counts.insert(symbol, memchr_iter(symbol, hay).count());
    }
    counts
}

pub fn symbol_frequencies(counts: &SymbolCounts, len: usize) -> SymbolFrequencies {
    let mut freq = VecMap::new();
    for &symbol in counts.keys() {
        let count = counts.get(&symbol).copied().unwrap_or(0);
        let f = if len == 0 {
            0.0
        } else {
            count as f64 / len as f64
        };
        freq.insert(symbol, f);
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_include_zeroes() {
        let counts = symbol_counts(b"AACA", &Alphabet::new(b"ACGT"));
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.get(&b'A'), Some(&3));
        assert_eq!(counts.get(&b'C'), Some(&1));
        assert_eq!(counts.get(&b'G'), Some(&0));
        assert_eq!(counts.get(&b'T'), Some(&0));
    }

    #[test]
    fn foreign_bytes_ignored() {
        let counts = symbol_counts(b"AXA", &Alphabet::new(b"AC"));
        assert_eq!(counts.get(&b'A'), Some(&2));
        assert_eq!(counts.get(&b'X'), None);
    }

    #[test]
    fn frequencies() {
        let counts = symbol_counts(b"ACAC", &Alphabet::new(b"ACGT"));
        let freq = symbol_frequencies(&counts, 4);
        assert!((freq.get(&b'A').copied().unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(freq.get(&b'G'), Some(&0.0));

        let empty = symbol_frequencies(&symbol_counts(b"", &Alphabet::new(b"AC")), 0);
        assert!(empty.keys().all(|k| empty.get(k) == Some(&0.0)));
    }
}
