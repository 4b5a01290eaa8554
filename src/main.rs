//! Timetable construction CLI.
//!
//! Loads an instance, runs one constructive heuristic, prints a summary and
//! optionally writes statistics and reservations to files.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use u_timetable::scheduler::Constructor;
use u_timetable::{load_problem, logging, report};

#[derive(Parser)]
#[command(name = "u-timetable")]
#[command(about = "Constructive classroom timetabling (best-fit and RCL)")]
struct Cli {
    /// Instance file (JSON)
    instance: PathBuf,

    /// Construction heuristic
    #[arg(long, value_enum, default_value_t = Heuristic::Greedy)]
    heuristic: Heuristic,

    /// RCL greediness (0 = best-fit, 1 = any feasible room)
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// RCL seed (0 = fresh entropy)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Override the per-violation preference penalty
    #[arg(long)]
    penalty: Option<u64>,

    /// Write statistics as CSV
    #[arg(long)]
    stats_csv: Option<PathBuf>,

    /// Write all reservations as JSON
    #[arg(long)]
    reservations: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Heuristic {
    /// Deterministic minimum-score placement
    Greedy,
    /// Randomized restricted candidate list
    Rcl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut problem = load_problem(&cli.instance)
        .with_context(|| format!("loading {}", cli.instance.display()))?;

    let mut constructor = match cli.heuristic {
        Heuristic::Greedy => Constructor::best_fit(),
        Heuristic::Rcl => Constructor::rcl(cli.alpha, cli.seed),
    };
    if let Some(penalty) = cli.penalty {
        constructor = constructor.with_preference_penalty(penalty);
    }

    let stats = constructor.run(&mut problem);

    println!("Instance: {}", cli.instance.display());
    report::write_summary(io::stdout().lock(), &stats, constructor.policy())?;

    if let Some(path) = &cli.stats_csv {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_csv(BufWriter::new(file), &stats)?;
        info!(path = %path.display(), "statistics written");
    }

    if let Some(path) = &cli.reservations {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_reservations_json(BufWriter::new(file), problem.reservations())?;
        info!(path = %path.display(), "reservations written");
    }

    Ok(())
}
