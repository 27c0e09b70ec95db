use crate::alphabets::Alphabet;

pub const START: u8 = b'M';
pub const STOP: u8 = b'*';

/// The twenty standard residues plus the stop marker.
pub fn alphabet() -> Alphabet {
    Alphabet::new(&b"ACDEFGHIKLMNPQRSTVWY*"[..])
}
