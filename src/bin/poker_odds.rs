//! Poker hand probability simulator.
//!
//! Usage:
//!   cargo run --release --bin poker_odds -- [OPTIONS]
//!
//! Deals random five-card hands on every core and prints how often each
//! category came up next to its theoretical probability.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use poker_odds::eval::HandType;
use poker_odds::sim::{Report, SimulationConfig, Simulator};
use poker_odds::Result;

#[derive(Parser, Debug)]
#[command(name = "poker_odds", about = "Monte Carlo five-card poker probabilities")]
struct Args {
    /// Hand type to calculate: rf, sf, 4k, fh, fl, st, 3k, 2p, 1p, hc
    #[arg(short = 't', long = "type", conflicts_with = "all")]
    hand_type: Option<String>,

    /// Calculate probabilities for all hand types (default)
    #[arg(short, long)]
    all: bool,

    /// Number of hands to simulate [default: 100000000]
    #[arg(short = 'n', long)]
    hands: Option<u64>,

    /// Worker threads (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Hands dealt per shuffle (1-10)
    #[arg(long)]
    reshuffle_every: Option<usize>,

    /// Disable the progress bar
    #[arg(long = "no-progress-bar")]
    no_progress_bar: bool,

    /// Load settings from a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let target = match &args.hand_type {
        Some(selector) if !args.all => Some(selector.parse::<HandType>()?),
        _ => None,
    };
    let config = build_config(&args)?;

    println!("Starting poker probability simulation...");
    match target {
        Some(t) => println!("Hand type: {}", t),
        None => println!("Analyzing all hand types"),
    }
    println!("Hands to simulate: {}", config.hands);
    println!("CPU Threads: {}", config.worker_count());

    let hands = config.hands;
    let mut simulator = Simulator::new(config)?;

    let report = match target {
        Some(t) => {
            let found = simulator.run_single(t)?;
            Report::single(t, found, hands, simulator.stats())
        }
        None => {
            let table = simulator.run_all()?;
            Report::new(&table, simulator.stats())
        }
    };

    print_report(&report);

    if let Some(path) = &args.json {
        match save_json(&report, path) {
            Ok(()) => println!("Saved JSON: {}", path.display()),
            Err(e) => eprintln!("Error saving JSON: {}", e),
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            SimulationConfig::from_json_file(path)?
        }
        None => SimulationConfig::default(),
    };

    // explicit flags override the file
    if let Some(hands) = args.hands {
        config.hands = hands;
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(interval) = args.reshuffle_every {
        config.reshuffle_interval = interval;
    }
    if args.no_progress_bar {
        config.progress = false;
    }

    config.validate()?;
    Ok(config)
}

fn print_report(report: &Report) {
    println!();
    println!("{}", "=".repeat(80));
    println!(
        "{:<16}{:>15}{:>12}{:>12}{:>12}",
        "Hand Type", "Count", "Calculated", "Theoretical", "Error"
    );
    println!("{}", "-".repeat(80));

    for row in &report.rows {
        println!(
            "{:<16}{:>15}{:>11.4}%{:>11.4}%{:>11.4}%",
            row.name, row.count, row.percentage, row.theoretical, row.error
        );
    }

    println!("{}", "-".repeat(80));
    println!("{:<16}{:>15}", "Total:", report.total);
    println!("Time: {:.2}s", report.stats.elapsed_seconds);
    println!("Speed: {:.0} hands/s", report.stats.hands_per_second);
    println!("{}", "=".repeat(80));
}

fn save_json(report: &Report, path: &Path) -> std::io::Result<()> {
    let json = report.to_json()?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}
