use crate::error::BioResult;
use crate::seq::chain::{classify_chains, FrameChains};
use crate::seq::frame::{six_frames, Frame, FRAME_COUNT};
use crate::seq::protein::ProteinSeq;
use crate::seq::rna::RnaSeq;
use crate::seq::Sequence;

/// Classified chains for all six frames, addressed by frame number 1..=6.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationResult {
    // always FRAME_COUNT entries, in Frame::ALL order
    frames: Vec<FrameChains>,
}

impl TranslationResult {
    pub fn get(&self, number: usize) -> Option<&FrameChains> {
        number.checked_sub(1).and_then(|i| self.frames.get(i))
    }

    /// Frames in order 1..=6.
    pub fn iter(&self) -> impl Iterator<Item = (Frame, &FrameChains)> {
        Frame::ALL.into_iter().zip(self.frames.iter())
    }

    pub fn protein_count(&self) -> usize {
        self.frames.iter().map(|f| f.protein.len()).sum()
    }

    pub fn oligo_count(&self) -> usize {
        self.frames.iter().map(|f| f.oligo.len()).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    /// Raw frame translations: +0, +1, +2, -0, -1, -2.
    pub orfs: [ProteinSeq; FRAME_COUNT],
    pub chains: TranslationResult,
}

pub fn translate(rna: &RnaSeq) -> Translation {
    let orfs = six_frames(rna);
    let frames: Vec<FrameChains> =
        par_map!(&orfs[..], |orf: &ProteinSeq| classify_chains(orf.as_bytes()));
    let chains = TranslationResult { frames };
    log::debug!(
        "translated {} bases: {} proteins, {} oligopeptides",
        rna.len(),
        chains.protein_count(),
        chains.oligo_count()
    );
    Translation { orfs, chains }
}

/// Transcribe (where needed) and translate every sequence. Fails on the first
/// sequence that is not a nucleic acid.
pub fn translate_all(seqs: &[Sequence]) -> BioResult<Vec<Translation>> {
    par_try_map!(seqs, |seq: &Sequence| -> BioResult<Translation> {
        let rna = seq.transcribe()?;
        Ok(translate(&rna))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BioError;
    use crate::seq::chain::ClassifiedChain;
    use crate::seq::dna::DnaSeq;

    fn rna(bytes: &[u8]) -> RnaSeq {
        RnaSeq::new(bytes.to_vec()).unwrap()
    }

    #[test]
    fn translate_small() {
        let t = translate(&rna(b"AUGGCCUAA"));
        assert_eq!(t.orfs[0].as_bytes(), b"MA*");

        let first = t.chains.get(1).unwrap();
        assert!(first.protein.is_empty());
        assert_eq!(first.oligo.len(), 1);
        assert_eq!(first.oligo[0].length, 2);
        assert_eq!(first.oligo[0].residues.to_string(), "MA");

        for n in 2..=6 {
            assert!(t.chains.get(n).unwrap().is_empty(), "frame {n}");
        }
        assert!(t.chains.get(0).is_none());
        assert!(t.chains.get(7).is_none());
    }

    #[test]
    fn translate_finds_reverse_strand_protein() {
        // AUG + 24 x GCC + UAA, then reverse complemented onto the minus strand.
        let mut forward = b"AUG".to_vec();
        forward.extend(b"GCC".repeat(24));
        forward.extend(b"UAA");
        let minus = rna(&forward).reverse_complement();

        let t = translate(&minus);
        let fourth = t.chains.get(4).unwrap();
        assert_eq!(fourth.protein.len(), 1);
        assert_eq!(fourth.protein[0].length, 25);
        assert_eq!(t.chains.protein_count(), 1);
    }

    #[test]
    fn iter_in_frame_order() {
        let t = translate(&rna(b"AUGAAAUGA"));
        let numbers: Vec<usize> = t.chains.iter().map(|(f, _)| f.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_input() {
        let t = translate(&rna(b""));
        assert!(t.orfs.iter().all(ProteinSeq::is_empty));
        assert_eq!(t.chains.iter().count(), 6);
        assert_eq!(t.chains.protein_count() + t.chains.oligo_count(), 0);
    }

    #[test]
    fn translate_all_mixed() {
        let seqs = vec![
            Sequence::Dna(DnaSeq::new(b"ATGGCCTAA".to_vec()).unwrap()),
            Sequence::Rna(rna(b"AUGGCCUAA")),
        ];
        let out = translate_all(&seqs).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
        let expected = ClassifiedChain {
            length: 2,
            residues: ProteinSeq::new(b"MA".to_vec()).unwrap(),
        };
        assert_eq!(out[0].chains.get(1).unwrap().oligo, vec![expected]);
    }

    #[test]
    fn translate_all_rejects_protein() {
        let seqs = vec![Sequence::Protein(ProteinSeq::new(b"MA".to_vec()).unwrap())];
        assert!(matches!(
            translate_all(&seqs),
            Err(BioError::UnexpectedKind { .. })
        ));
    }
}
