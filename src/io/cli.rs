//! Command-line interface generating a demo terrain map

use crate::algorithm::CollapseEngine;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::Result;
use crate::io::image::export_slice_as_png;
use crate::io::progress::ProgressManager;
use crate::lattice::{GridTopology, Lattice};
use crate::proto::PrototypeGenerator;
use crate::proto::rules::GenerationRule;
use crate::proto::tile::{SocketRules, TileDescriptor};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavelattice")]
#[command(
    author,
    version,
    about = "Collapse a demo terrain lattice into a PNG tile map"
)]
/// Command-line arguments for the demo generator
pub struct Cli {
    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Lattice width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Lattice height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Cap on observation steps (defaults to the termination bound)
    #[arg(short = 'b', long)]
    pub step_budget: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Include quarter-turn rotations of each demo tile
    #[arg(short, long)]
    pub rotate: bool,

    /// Include mirrored variants of each demo tile
    #[arg(short, long)]
    pub mirror: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Built-in terrain tileset used by the demo CLI and benchmarks
///
/// Water, sand, grass, and forest carry one socket on every side face; the
/// road tile is directional, so rotation rules give it both axes. The palette
/// maps asset names to display colors.
pub fn demo_tileset() -> (Vec<TileDescriptor>, SocketRules, HashMap<String, [u8; 4]>) {
    let tiles = vec![
        TileDescriptor::new("water", 1.0, ["w", "w", "w", "w", "v", "v"]),
        TileDescriptor::new("sand", 0.5, ["s", "s", "s", "s", "v", "v"]),
        TileDescriptor::new("grass", 1.2, ["g", "g", "g", "g", "v", "v"]),
        TileDescriptor::new("forest", 0.8, ["f", "f", "f", "f", "v", "v"]),
        TileDescriptor::new("road", 0.3, ["r", "r", "g", "g", "v", "v"]),
    ];

    let mut sockets = SocketRules::new();
    sockets.allow("w", "w");
    sockets.allow("w", "s");
    sockets.allow("s", "s");
    sockets.allow("s", "g");
    sockets.allow("g", "g");
    sockets.allow("g", "f");
    sockets.allow("f", "f");
    sockets.allow("r", "r");

    let palette = HashMap::from([
        ("water".to_owned(), [38, 84, 158, 255]),
        ("sand".to_owned(), [222, 203, 137, 255]),
        ("grass".to_owned(), [92, 158, 68, 255]),
        ("forest".to_owned(), [38, 92, 42, 255]),
        ("road".to_owned(), [94, 90, 86, 255]),
    ]);

    (tiles, sockets, palette)
}

/// Orchestrates one demo generation run with progress tracking
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the map and export it
    ///
    /// # Errors
    ///
    /// Returns an error if prototype generation, lattice construction, the
    /// collapse run, or the PNG export fails. A contradiction is reported to
    /// the caller unchanged; rerunning with a different seed is the usual
    /// remedy.
    // Allow print for user-facing warnings and the completion message
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let (tiles, sockets, palette) = demo_tileset();

        let mut generator = PrototypeGenerator::new(sockets);
        generator.add_rule(GenerationRule::Identity);
        if self.cli.rotate {
            generator.add_rule(GenerationRule::Rotations);
        }
        if self.cli.mirror {
            generator.add_rule(GenerationRule::Mirror);
        }

        for tile in &tiles {
            generator.ingest(tile)?;
        }

        for starved in &generator.stats().starved {
            eprintln!("Warning: tile '{starved}' produced no variants and cannot appear");
        }

        let prototypes = generator.finish()?;
        let topology = GridTopology::flat(self.cli.width, self.cli.height)?;
        let lattice = Lattice::generate(&topology, &prototypes)?;

        let mut engine = CollapseEngine::new(lattice, prototypes, self.cli.seed);
        if let Some(budget) = self.cli.step_budget {
            engine = engine.with_step_budget(budget);
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(engine.lattice().len()));

        loop {
            match engine.step() {
                Ok(true) => {
                    if let Some(ref bar) = progress {
                        bar.update(engine.lattice().collapsed_count(), engine.observations());
                    }
                }
                Ok(false) => break,
                Err(err) => {
                    if let Some(ref bar) = progress {
                        bar.abandon(&err.to_string());
                    }
                    return Err(err);
                }
            }
        }

        let solution = engine.solution()?;
        if let Some(ref bar) = progress {
            bar.finish(solution.observations);
        }

        export_slice_as_png(&solution.assignments, &palette, &self.cli.output)?;

        if !self.cli.quiet {
            eprintln!("Wrote {}", self.cli.output.display());
        }
        Ok(())
    }
}
