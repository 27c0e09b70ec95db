//! Sequence-kind detection for raw FASTA payloads.
//!
//! Rules (deterministic, not probabilistic):
//! - Contains any protein-only character or a stop marker → Protein
//! - Contains U but not T → RNA
//! - Otherwise → DNA

use crate::seq::SeqKind;

/// Bytes that never occur in a strict DNA or RNA sequence but do in protein.
const PROTEIN_ONLY: &[u8] = b"DEFHIKLMPQRSVWY*";

/// Short-circuits on the first protein-only byte. Input is expected to be
/// upper-cased already, as the FASTA reader does.
pub fn detect_seq_kind(bytes: &[u8]) -> SeqKind {
    let mut has_t = false;
    let mut has_u = false;

    for &b in bytes {
        if PROTEIN_ONLY.contains(&b) {
            return SeqKind::Protein;
        }
        match b {
            b'T' => has_t = true,
            b'U' => has_u = true,
            _ => {}
        }
    }

    if has_u && !has_t {
        SeqKind::Rna
    } else {
        SeqKind::Dna
    }
}
