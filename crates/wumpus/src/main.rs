//! Hunt the Wumpus map generator
//!
//! Generates one cave map and prints it.

use anyhow::Context;
use clap::Parser;

use wm_core::render::{render_legend, render_map};
use wm_core::{GameRng, MapConfig, MapGenerator};

/// Generate a Hunt the Wumpus cave map
#[derive(Parser, Debug)]
#[command(name = "wumpus")]
#[command(author, version, about = "Generate a Hunt the Wumpus cave map", long_about = None)]
struct Args {
    /// Replay the map for this seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the map as JSON instead of glyphs
    #[arg(long = "json")]
    json: bool,

    /// Log generation steps
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();
    log::info!("seed {seed}");

    let mut generator = MapGenerator::new(MapConfig::default(), rng)?;
    let map = generator
        .generate()
        .with_context(|| format!("generating map for seed {seed}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!("{}", render_map(&map.grid));
    print!("{}", render_legend(&map));
    log::info!("map ready after {} attempt(s)", map.attempts);

    Ok(())
}
