//! Moral Drift Simulation Engine
//!
//! Runs the Creature-and-Humans trust simulation for a fixed number of
//! ticks and streams one JSONL snapshot per tick to the output file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use drift_core::{SimConfig, Simulation};
use drift_events::JsonlCollector;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "moral_drift")]
#[command(about = "A moral drift trust simulation")]
struct Args {
    /// Path to a TOML configuration file (defaults used if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed override for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 50)]
    ticks: u64,

    /// Output file for per-tick JSONL snapshots
    #[arg(long, default_value = "output/snapshots.jsonl")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: could not load config {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    println!("Moral Drift Simulation");
    println!("======================");
    println!("Humans: {}", config.population_size);
    println!("Topology: {:?}", config.topology);
    match config.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: (entropy)"),
    }
    println!("Ticks: {}", args.ticks);
    println!();

    if let Some(dir) = args.output.parent() {
        if !dir.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(dir) {
                eprintln!("Warning: could not create output directory: {}", e);
            }
        }
    }

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: could not build simulation: {}", e);
            process::exit(1);
        }
    };

    let file = match File::create(&args.output) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: could not open {}: {}", args.output.display(), e);
            process::exit(1);
        }
    };
    let mut collector = JsonlCollector::new(BufWriter::new(file));

    println!("Running {} ticks...", args.ticks);
    if let Err(e) = sim.run(args.ticks, &mut collector) {
        eprintln!("Error: could not record snapshot: {}", e);
        process::exit(1);
    }
    if let Err(e) = collector.into_inner() {
        eprintln!("Error: could not flush output: {}", e);
        process::exit(1);
    }

    let last = sim.snapshot();
    println!();
    println!("Run complete after {} ticks", sim.tick());
    println!("  Creature state: {}", last.creature.state);
    println!(
        "  Creature emotions: empathy {:.1}, resentment {:.1}",
        last.creature.empathy, last.creature.resentment
    );
    println!(
        "  Humans: {} fearful, {} neutral, {} compassionate",
        last.trust_counts.fearful, last.trust_counts.neutral, last.trust_counts.compassionate
    );
    println!("  Snapshots written to {}", args.output.display());
}
