//! BSP dungeon generator
//!
//! Generates a dungeon once and draws it, or runs the prompt loop with
//! `--interactive`.

mod config;
mod interactive;
mod render;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dg_core::{DungeonGenerator, DungeonRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Overrides;

/// Generate rooms and corridors by binary space partitioning
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(short = 'W', long)]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    height: Option<i32>,

    /// Target number of rooms
    #[arg(short, long)]
    rooms: Option<i32>,

    /// Number of single-cell junctions
    #[arg(short, long)]
    branches: Option<i32>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with default parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the text dump instead of colours
    #[arg(short, long)]
    dump: bool,

    /// Prompt for parameters and re-run on request
    #[arg(short, long, conflicts_with = "dump")]
    interactive: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            rooms: self.rooms,
            branches: self.branches,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    info!(seed = rng.seed(), "random source ready");

    let mut stdout = io::stdout().lock();

    if args.interactive {
        let mut stdin = io::stdin().lock();
        return interactive::run(&mut stdin, &mut stdout, &mut rng);
    }

    let params = config::resolve(args.config.as_deref(), &args.overrides())?;
    let mut generator = DungeonGenerator::new();
    let grid = generator.generate(&params, &mut rng)?;

    if args.dump {
        render::dump(&mut stdout, grid)?;
    } else {
        render::render(&mut stdout, grid, &params)?;
    }
    Ok(())
}
