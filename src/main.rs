//! Euclidean TSP Heuristic Solver - Command Line Interface
//!
//! Reads a point set (count plus coordinate pairs) from stdin or a file,
//! runs the time-budgeted greedy + 2-opt pipeline and prints the tour as
//! one node index per line.

use clap::{Parser, Subcommand};
use tsp_2opt_solver::instance::TspInstance;
use tsp_2opt_solver::neighbors::DEFAULT_NEIGHBOR_LIST_SIZE;
use tsp_2opt_solver::solver::{SearchDriver, SolverConfig, DEFAULT_TIME_BUDGET_SECS};

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "tsp-2opt-solver")]
#[command(author = "M2 AI2D Student")]
#[command(version = "1.0")]
#[command(about = "A time-budgeted heuristic solver for the Euclidean TSP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance (the default when no subcommand is given)
    Solve {
        /// Path to the instance file; stdin when omitted
        #[arg(short, long)]
        instance: Option<PathBuf>,

        /// Wall-clock budget in seconds. The default sits just under a
        /// common 2-second judge limit
        #[arg(short, long, default_value_t = DEFAULT_TIME_BUDGET_SECS)]
        time_limit: f64,

        /// Neighbor candidate list size (k)
        #[arg(short, long, default_value_t = DEFAULT_NEIGHBOR_LIST_SIZE)]
        neighbors: usize,

        /// Write the full solution as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress the result summary on stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Analyze an instance
    Analyze {
        /// Path to the instance file
        #[arg(short, long)]
        instance: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve { instance, time_limit, neighbors, output, quiet }) => {
            solve_instance(instance, time_limit, neighbors, output, quiet);
        }

        Some(Commands::Analyze { instance }) => {
            analyze_instance(&instance);
        }

        // Bare invocation behaves like `solve` on stdin with defaults
        None => {
            solve_instance(None, DEFAULT_TIME_BUDGET_SECS, DEFAULT_NEIGHBOR_LIST_SIZE, None, true);
        }
    }
}

fn load_instance(path: Option<&PathBuf>) -> TspInstance {
    let result = match path {
        Some(p) => TspInstance::from_file(p),
        None => TspInstance::from_stdin(),
    };
    match result {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("Error loading instance: {}", e);
            std::process::exit(1);
        }
    }
}

fn solve_instance(
    path: Option<PathBuf>,
    time_limit: f64,
    neighbors: usize,
    output: Option<PathBuf>,
    quiet: bool,
) {
    let instance = load_instance(path.as_ref());

    let config = SolverConfig {
        neighbor_list_size: neighbors,
        time_budget: Duration::from_secs_f64(time_limit),
    };
    let solution = SearchDriver::new(config).solve(&instance);

    // The tour itself goes to stdout, one node index per line
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for &node in &solution.tour {
        writeln!(out, "{}", node).expect("Failed to write tour");
    }
    out.flush().expect("Failed to write tour");

    if !quiet {
        eprintln!("Algorithm: {}", solution.algorithm);
        eprintln!("Length: {}", solution.length);
        eprintln!("Time: {:.4}s", solution.computation_time);
        if let Some(passes) = solution.iterations {
            eprintln!("Passes: {}", passes);
        }
    }

    if let Some(out_path) = output {
        let json = serde_json::to_string_pretty(&solution).expect("Failed to serialize solution");
        std::fs::write(&out_path, json).expect("Failed to write output");
        if !quiet {
            eprintln!("Solution saved to {:?}", out_path);
        }
    }
}

fn analyze_instance(path: &PathBuf) {
    let instance = load_instance(Some(path));
    println!("{}", instance.statistics());
}
