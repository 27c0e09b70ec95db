use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

/// Replace every `T` with `U`, leaving all other bytes in place.
pub fn transcribe(text: &[u8]) -> Vec<u8> {
    text.iter()
        .map(|&b| if b == b'T' { b'U' } else { b })
        .collect()
}
