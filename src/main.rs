//! CLI entry point for the wave function collapse demo generator

use clap::Parser;
use wavelattice::io::cli::{Cli, GenerationRunner};

fn main() -> wavelattice::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.run()
}
