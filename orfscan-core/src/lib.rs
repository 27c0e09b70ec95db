//! DNA/RNA/protein sequences, transcription, six-frame translation and
//! start-to-stop chain classification.
//!
//! ```
//! use orfscan_core::seq::{ChainKind, DnaSeq};
//!
//! let dna = DnaSeq::new(b"ATGGCCTAA".to_vec()).unwrap();
//! let translation = dna.transcribe().translate();
//! let frame_one = translation.chains.get(1).unwrap();
//! assert_eq!(frame_one.get(ChainKind::Oligopeptide)[0].residues.to_string(), "MA");
//! ```

#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod seq;
