//! solver-cli: command-line host for the timetable solver.
//!
//! Reads a `RawSnapshot` JSON document (from a file or stdin), loads it for
//! a chosen term, runs the evolutionary search, and writes the resolved
//! schedule to stdout. The grouped, human-readable table the original
//! program wrote to a `.txt` file is deliberately not reproduced here --
//! that formatting lives downstream of this crate's contract.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use solver_core::loader::{Loader, RawSnapshot};
use solver_core::models::{GeneticAlgorithmConfig, Outcome, ProgressCallback, Term};
use solver_core::run_solver;

/// Generates a weekly timetable from a term snapshot using a genetic algorithm.
#[derive(Parser)]
#[command(name = "solver-cli")]
#[command(version)]
#[command(about = "Timetable solver CLI", long_about = None)]
struct Cli {
    /// Input RawSnapshot JSON file (omit together with --stdin to read nothing)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Read the RawSnapshot JSON document from stdin instead of a file
    #[arg(long)]
    stdin: bool,

    /// Genetic algorithm configuration file (JSON or YAML); unset fields keep their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of generations to run (overrides --config and the built-in default)
    #[arg(short = 'g', long)]
    generations: Option<u64>,

    /// Solve for the summer term (default)
    #[arg(short = 's', long)]
    summer: bool,

    /// Solve for the winter term (overrides --summer)
    #[arg(short = 'w', long)]
    winter: bool,

    /// Print the resulting schedule as a grouped text table (default on)
    #[arg(short = 't', long, default_value_t = true)]
    print_tabular: bool,

    /// Turn on debug-level logging
    #[arg(short = 'd', long)]
    debug_mode: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let term = if cli.winter { Term::Winter } else { Term::Sommer };

    let json = read_input(cli.input, cli.stdin)?;
    let snapshot: RawSnapshot = serde_json::from_str(&json).context("failed to parse input JSON")?;
    let problem = Loader::load(&snapshot, term).context("failed to load problem")?;

    log::info!(
        "loaded problem for term {term}: {} blocks, {} slots",
        problem.num_blocks(),
        problem.num_slots()
    );

    let mut config = match &cli.config {
        Some(path) => {
            GeneticAlgorithmConfig::from_file(path).context("failed to load solver configuration")?
        }
        None => GeneticAlgorithmConfig::default(),
    };
    if let Some(generations) = cli.generations {
        config.num_generations = generations;
    }

    let bar = ProgressBar::new(config.num_generations);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} (best: {msg})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let progress_callback: ProgressCallback = Box::new(move |update| {
        bar.set_position(update.generation);
        bar.set_message(update.best_penalty.to_string());
        true
    });

    let outcome = run_solver(&problem, &config, Some(&progress_callback))
        .map_err(|e| anyhow::anyhow!("solver error: {e}"))?;

    log::info!(
        "search finished after {} generations: {:?}, penalty {}",
        outcome.generations_completed,
        outcome.outcome,
        outcome.penalty
    );

    if matches!(outcome.outcome, Outcome::Cancelled) {
        eprintln!("search was cancelled; reporting best-so-far schedule");
    }

    if cli.print_tabular {
        print_schedule(&problem, &outcome.genes, outcome.penalty);
    } else {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}

fn read_input(file: Option<PathBuf>, use_stdin: bool) -> Result<String> {
    if use_stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else if let Some(path) = file {
        fs::read_to_string(&path).with_context(|| format!("failed to read file: {path:?}"))
    } else {
        bail!("provide an input file or pass --stdin")
    }
}

/// A minimal grouped-by-day-then-time text dump: proves the solver's output
/// contract is directly usable, without reproducing the original's full
/// `tabulate`-based pretty-printer.
fn print_schedule(problem: &solver_core::loader::Problem, genes: &[u32], penalty: u32) {
    let mut by_day: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (block, &slot_index) in problem.blocks.iter().zip(genes.iter()) {
        let slot = &problem.slots[slot_index as usize];
        let day_name = problem
            .days
            .get(&slot.day_id)
            .map(|d| d.name())
            .unwrap_or("?");
        let time_slot = problem.time_slots.get(&slot.time_slot_id);
        let (start, end) = time_slot
            .map(|t| (t.start_minutes, t.end_minutes))
            .unwrap_or((0, 0));
        by_day.entry(day_name.to_string()).or_default().push(format!(
            "  {:>4}-{:<4} event {:>4} -> room {}",
            start, end, block.event_id, slot.room_id
        ));
    }

    println!("penalty: {penalty}");
    for (day, mut lines) in by_day {
        println!("{day}:");
        lines.sort();
        for line in lines {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_input_reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"days\":[]}}").unwrap();
        let contents = read_input(Some(file.path().to_path_buf()), false).unwrap();
        assert_eq!(contents, "{\"days\":[]}");
    }

    #[test]
    fn read_input_without_file_or_stdin_errors() {
        let err = read_input(None, false).unwrap_err();
        assert!(err.to_string().contains("--stdin"));
    }
}
