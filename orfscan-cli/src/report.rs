use orfscan_core::seq::traits::SeqBytes;
use orfscan_core::seq::{ChainKind, SeqRecord, Sequence, Translation};
use std::io::{self, Write};

pub const HEADER: &str = "#id\tframe\tkind\tlength\tsequence";

/// Report filters.
#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    pub min_length: usize,
    pub counts: bool,
}

/// One line per classified chain, proteins before oligopeptides within a
/// frame, frames in order 1..=6.
pub fn write_record<W: Write>(
    out: &mut W,
    record: &SeqRecord<Sequence>,
    translation: &Translation,
    opts: &ReportOptions,
) -> io::Result<usize> {
    if opts.counts {
        write_counts(out, record)?;
    }

    let mut written = 0;
    for (frame, chains) in translation.chains.iter() {
        for kind in [ChainKind::Protein, ChainKind::Oligopeptide] {
            for chain in chains.get(kind) {
                if chain.length < opts.min_length {
                    continue;
                }
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    record.id(),
                    frame.number(),
                    kind.as_str(),
                    chain.length,
                    chain.residues
                )?;
                written += 1;
            }
        }
    }
    Ok(written)
}

fn write_counts<W: Write>(out: &mut W, record: &SeqRecord<Sequence>) -> io::Result<()> {
    let counts = record.seq().counts();
    let fields: Vec<String> = counts
        .keys()
        .map(|&symbol| {
            let n = counts.get(&symbol).copied().unwrap_or(0);
            format!("{}={}", symbol as char, n)
        })
        .collect();
    writeln!(out, "#counts\t{}\t{}", record.id(), fields.join(","))
}
