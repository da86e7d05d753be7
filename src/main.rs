//! CLI entry point for the mosaic generator

use clap::Parser;
use mosaicmaker::io::cli::{Cli, FileProcessor};
use mosaicmaker::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> mosaicmaker::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
