//! Start-to-stop chain extraction over a single translated frame.
//!
//! A scan walks the residues looking for the start residue `M`. Once one is
//! found everything up to, but not including, the next `*` (or the end of the
//! frame) becomes one chain; nested `M`s belong to the open chain. Chains are
//! split by length into proteins and oligopeptides.

use crate::alphabets::protein::{START, STOP};
use crate::seq::protein::ProteinSeq;
use memchr::memchr;

/// Longest chain still reported as an oligopeptide.
pub const OLIGOPEPTIDE_MAX_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChainKind {
    Protein,
    Oligopeptide,
}

impl ChainKind {
    /// `None` for an empty chain, which is never reported.
    pub fn for_length(len: usize) -> Option<Self> {
        match len {
            0 => None,
            1..=OLIGOPEPTIDE_MAX_LEN => Some(ChainKind::Oligopeptide),
            _ => Some(ChainKind::Protein),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainKind::Protein => "Protein",
            ChainKind::Oligopeptide => "Oligo",
        }
    }
}

/// Orders by length first, then by residues.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassifiedChain {
    pub length: usize,
    pub residues: ProteinSeq,
}

impl ClassifiedChain {
    fn new(residues: &[u8]) -> Self {
        Self {
            length: residues.len(),
            residues: ProteinSeq::from_bytes_unchecked(residues.to_vec()),
        }
    }

    pub fn kind(&self) -> ChainKind {
        // Stored chains are never empty.
        ChainKind::for_length(self.length).unwrap_or(ChainKind::Oligopeptide)
    }
}

/// Chains found in one frame, each list sorted longest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameChains {
    pub protein: Vec<ClassifiedChain>,
    pub oligo: Vec<ClassifiedChain>,
}

impl FrameChains {
    pub fn get(&self, kind: ChainKind) -> &[ClassifiedChain] {
        match kind {
            ChainKind::Protein => &self.protein,
            ChainKind::Oligopeptide => &self.oligo,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.protein.is_empty() && self.oligo.is_empty()
    }

    pub fn len(&self) -> usize {
        self.protein.len() + self.oligo.len()
    }

    fn push(&mut self, residues: &[u8]) {
        match ChainKind::for_length(residues.len()) {
            Some(ChainKind::Protein) => self.protein.push(ClassifiedChain::new(residues)),
            Some(ChainKind::Oligopeptide) => self.oligo.push(ClassifiedChain::new(residues)),
            None => {}
        }
    }

    fn sort_descending(&mut self) {
        self.protein.sort_unstable_by(|a, b| b.cmp(a));
        self.oligo.sort_unstable_by(|a, b| b.cmp(a));
    }
}

pub fn classify_chains(residues: &[u8]) -> FrameChains {
    let mut chains = FrameChains::default();
    let mut idx = 0;

    while idx < residues.len() {
        if residues[idx] != START {
            idx += 1;
            continue;
        }

        let start = idx;
        idx = memchr(STOP, &residues[start..]).map_or(residues.len(), |i| start + i);
        chains.push(&residues[start..idx]);
        // idx now sits on the stop marker (or the end); the next pass steps over it.
    }

    chains.sort_descending();
    chains
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(chains: &[ClassifiedChain]) -> Vec<(usize, String)> {
        chains
            .iter()
            .map(|c| (c.length, c.residues.to_string()))
            .collect()
    }

    #[test]
    fn no_start_no_chains() {
        let chains = classify_chains(b"AAAK*WW*");
        assert!(chains.protein.is_empty());
        assert!(chains.oligo.is_empty());
        assert!(classify_chains(b"").is_empty());
    }

    #[test]
    fn short_chain_is_oligo() {
        let chains = classify_chains(b"MA*");
        assert!(chains.protein.is_empty());
        assert_eq!(pairs(&chains.oligo), vec![(2, "MA".to_string())]);
        assert_eq!(chains.oligo[0].kind(), ChainKind::Oligopeptide);
    }

    #[test]
    fn long_chain_is_protein() {
        let chains = classify_chains(b"MAAAAAAAAAAAAAAAAAAAAA*");
        assert_eq!(
            pairs(&chains.protein),
            vec![(22, "MAAAAAAAAAAAAAAAAAAAAA".to_string())]
        );
        assert!(chains.oligo.is_empty());
        assert_eq!(chains.protein[0].kind(), ChainKind::Protein);
    }

    #[test]
    fn length_boundary() {
        let twenty = format!("M{}*", "A".repeat(19));
        let chains = classify_chains(twenty.as_bytes());
        assert_eq!(chains.oligo.len(), 1);
        assert_eq!(chains.oligo[0].length, 20);

        let twenty_one = format!("M{}*", "A".repeat(20));
        let chains = classify_chains(twenty_one.as_bytes());
        assert_eq!(chains.protein.len(), 1);
        assert_eq!(chains.protein[0].length, 21);
    }

    #[test]
    fn unterminated_chain_runs_to_end() {
        let chains = classify_chains(b"KKMAW");
        assert_eq!(pairs(&chains.oligo), vec![(3, "MAW".to_string())]);

        let chains = classify_chains(b"AM");
        assert_eq!(pairs(&chains.oligo), vec![(1, "M".to_string())]);
    }

    #[test]
    fn nested_start_stays_in_open_chain() {
        let chains = classify_chains(b"MAMK*MW");
        assert_eq!(
            pairs(&chains.oligo),
            vec![(4, "MAMK".to_string()), (2, "MW".to_string())]
        );
    }

    #[test]
    fn lone_stop_markers() {
        let chains = classify_chains(b"M**M*");
        assert_eq!(
            pairs(&chains.oligo),
            vec![(1, "M".to_string()), (1, "M".to_string())]
        );
    }

    #[test]
    fn sorted_descending_by_length_then_sequence() {
        let chains = classify_chains(b"MA*MWK*MC*MKK*");
        assert_eq!(
            pairs(&chains.oligo),
            vec![
                (3, "MWK".to_string()),
                (3, "MKK".to_string()),
                (2, "MC".to_string()),
                (2, "MA".to_string()),
            ]
        );
    }

    #[test]
    fn kind_for_length() {
        assert_eq!(ChainKind::for_length(0), None);
        assert_eq!(ChainKind::for_length(1), Some(ChainKind::Oligopeptide));
        assert_eq!(
            ChainKind::for_length(OLIGOPEPTIDE_MAX_LEN),
            Some(ChainKind::Oligopeptide)
        );
        assert_eq!(
            ChainKind::for_length(OLIGOPEPTIDE_MAX_LEN + 1),
            Some(ChainKind::Protein)
        );
    }
}
