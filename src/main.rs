//! CLI entry point for batch pixelation of PNG images

use clap::Parser;
use pixelation::io::cli::{Cli, FileProcessor};

fn main() -> pixelation::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    let outputs = processor.process()?;
    log::info!("wrote {} images", outputs.len());
    Ok(())
}
