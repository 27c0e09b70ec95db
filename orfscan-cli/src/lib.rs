pub mod cli;
pub mod report;
pub mod scan;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MIN_THREADS: usize = 1;
