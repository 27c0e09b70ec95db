use log::{info, warn};
use orfscan_core::io::fasta::read_fasta_records_from_path;
use orfscan_core::seq::translation::translate_all;
use orfscan_core::seq::{SeqKind, SeqRecord, Sequence};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::cli::{Args, CliError};
use crate::report::{write_record, ReportOptions, HEADER};

/// Read, translate and report every nucleic-acid record of `args.input`.
pub fn scan_orfs(args: &Args) -> Result<(), CliError> {
    let records: Vec<SeqRecord<Sequence>> = read_fasta_records_from_path(&args.input)?;
    info!("Read {} records from {:?}", records.len(), args.input);

    let (records, skipped): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.kind() != SeqKind::Protein);
    for record in &skipped {
        warn!("Record {} is a protein sequence. Skipping...", record.id());
    }

    let seqs: Vec<Sequence> = records.iter().map(|record| record.seq().clone()).collect();
    let translations = translate_all(&seqs)?;

    let opts = ReportOptions {
        min_length: args.min_length,
        counts: args.counts,
    };

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    writeln!(writer, "{}", HEADER)?;
    let mut chains = 0;
    for (record, translation) in records.iter().zip(&translations) {
        chains += write_record(&mut writer, record, translation, &opts)?;
    }
    writer.flush()?;

    info!(
        "Reported {} chains from {} records ({} skipped)",
        chains,
        records.len(),
        skipped.len()
    );

    Ok(())
}
