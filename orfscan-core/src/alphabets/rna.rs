use crate::alphabets::Alphabet;
use crate::error::BioResult;
use std::sync::LazyLock;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGU")
}

// 0 marks bytes without a complement.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    b"AUCG"
        .iter()
        .zip(b"UAGC".iter())
        .for_each(|(&a, &b)| comp[a as usize] = b);
    comp
});

#[inline]
pub fn complement(a: u8) -> Option<u8> {
    match COMPLEMENT[a as usize] {
        0 => None,
        c => Some(c),
    }
}

/// Reverse `text` and complement each base. Errors name the first byte of
/// `text` outside `ACGU`.
pub fn reverse_complement(text: &[u8]) -> BioResult<Vec<u8>> {
    alphabet().validate(text)?;
    Ok(text
        .iter()
        .rev()
        .filter_map(|&a| complement(a))
        .collect())
}
