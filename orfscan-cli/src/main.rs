// 1. read --input FASTA (DNA, mRNA or protein records)
// 2. transcribe DNA, skip protein
// 3. translate all six frames and classify start/stop chains
// 4. write one TSV line per chain to --output or stdout

use clap::Parser;
use log::{error, info};
use simple_logger::init_with_level;

use orfscan_cli::{cli::Args, scan::scan_orfs, VERSION};

fn main() {
    let start = std::time::Instant::now();
    let args: Args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| {
        eprintln!("ERROR: failed to initialise logger: {}", e);
        std::process::exit(1);
    });
    info!("orfscan v{}", VERSION);

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .unwrap_or_else(|e| {
            error!("{}", e);
            std::process::exit(1);
        });

    scan_orfs(&args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
