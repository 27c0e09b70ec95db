//! Standard genetic code over RNA codons.

use std::sync::LazyLock;

pub const CODON_LEN: usize = 3;

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'U' as usize] = 3;
    map
});

// Indexed by the 2-bit ranks of the three bases (A=0, C=1, G=2, U=3).
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Look up a single codon. Anything that is not exactly three bases from
/// `ACGU` has no translation.
#[inline]
pub fn translate_codon(codon: &[u8]) -> Option<u8> {
    let &[b1, b2, b3] = codon else {
        return None;
    };
    let i1 = BASE_INDEX[b1 as usize];
    let i2 = BASE_INDEX[b2 as usize];
    let i3 = BASE_INDEX[b3 as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        Some(CODON_TABLE[idx])
    } else {
        None
    }
}
