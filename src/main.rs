//! CLI entry point for the pattern generator

use clap::Parser;
use geopattern::io::cli::{BatchProcessor, Cli};
use geopattern::io::logging::init_tracing;

fn main() -> geopattern::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
