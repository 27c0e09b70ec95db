use crate::alphabets::{rna, Alphabet};
use crate::error::BioResult;
use crate::seq::frame::{self, FRAME_COUNT};
use crate::seq::protein::ProteinSeq;
use crate::seq::traits::SeqBytes;
use crate::seq::translation::{self, Translation};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    bytes: Vec<u8>,
}

impl RnaSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        rna::alphabet().validate(&bytes)?;
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
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

    /// Already RNA, so this is the identity.
    pub fn transcribe(&self) -> RnaSeq {
        self.clone()
    }

    pub fn reverse_complement(&self) -> Self {
        // Every byte was checked against ACGU on construction.
        let out = self
            .bytes
            .iter()
            .rev()
            .map(|&a| rna::complement(a).unwrap_or(a))
            .collect();
        Self { bytes: out }
    }

    pub fn translate_frame(&self, offset: usize) -> BioResult<ProteinSeq> {
        frame::translate_frame(self.as_bytes(), offset)
    }

    pub fn six_frames(&self) -> [ProteinSeq; FRAME_COUNT] {
        frame::six_frames(self)
    }

    /// Six-frame translation followed by chain classification of every frame.
    pub fn translate(&self) -> Translation {
        translation::translate(self)
    }
}

impl SeqBytes for RnaSeq {
    fn as_bytes(&self) -> &[u8] {
        RnaSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self> {
        RnaSeq::new(bytes)
    }

    fn alphabet(&self) -> Alphabet {
        rna::alphabet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BioError;

    #[test]
    fn construction() {
        assert!(RnaSeq::new(b"ACGU".to_vec()).is_ok());
        match RnaSeq::new(b"ACGT".to_vec()).unwrap_err() {
            BioError::InvalidBase { ch, pos } => {
                assert_eq!(ch, 'T');
                assert_eq!(pos, 3);
            }
            other => panic!("expected invalid base, got {other:?}"),
        }
    }

    #[test]
    fn transcribe_is_identity() {
        let rna = RnaSeq::new(b"AUGGCC".to_vec()).unwrap();
        assert_eq!(rna.transcribe(), rna);
    }

    #[test]
    fn reverse_complement_basic() {
        let rna = RnaSeq::new(b"AACGU".to_vec()).unwrap();
        assert_eq!(rna.reverse_complement().as_bytes(), b"ACGUU");
        let rna = RnaSeq::new(b"ACGU".to_vec()).unwrap();
        assert_eq!(rna.reverse_complement().as_bytes(), b"ACGU");
    }

    #[test]
    fn translate_frame_basic() {
        let rna = RnaSeq::new(b"AUGGCCUAA".to_vec()).unwrap();
        assert_eq!(rna.translate_frame(0).unwrap().as_bytes(), b"MA*");
        assert_eq!(rna.translate_frame(1).unwrap().as_bytes(), b"WP");
        assert!(rna.translate_frame(3).is_err());
    }

    #[test]
    fn six_frames_matches_frame_count() {
        let rna = RnaSeq::new(b"AUGGCCUAA".to_vec()).unwrap();
        let frames = rna.six_frames();
        assert_eq!(frames.len(), FRAME_COUNT);
        assert_eq!(frames[0].as_bytes(), b"MA*");
        assert_eq!(frames[3].as_bytes(), b"LGH");
    }

    #[test]
    fn counts_over_alphabet() {
        let rna = RnaSeq::new(b"UUAG".to_vec()).unwrap();
        let counts = rna.counts();
        assert_eq!(counts.get(&b'U'), Some(&2));
        assert_eq!(counts.get(&b'T'), None);
        assert_eq!(counts.len(), 4);
    }
}
