//! # sudoku-csp
//!
//! `sudoku-csp` is a configurable command-line Sudoku solver built on a
//! Constraint Satisfaction Problem engine: backtracking search with
//! pluggable variable ordering (MRV or static scan order) and pluggable
//! constraint propagation (full MAC, single-pass forward checking, or
//! none).
//!
//! ## Usage
//!
//! ```sh
//! # Solve every puzzle in a line-oriented puzzle file
//! sudoku-csp puzzles.txt
//!
//! # Solve one inline puzzle and print the grid
//! sudoku-csp solve --input 0200000203404000 --print-solution
//!
//! # Compare propagation strategies
//! sudoku-csp solve --input <puzzle> --forward-check
//! sudoku-csp solve --input <puzzle> --no-inference
//!
//! # Replay the fixed-seed timing experiment over a puzzle collection
//! sudoku-csp experiment --path sudoku9.txt --seed 5988222 --count 50
//! ```
//!
//! Puzzles are single lines of `n * n` row-major base-36 digit characters
//! with `0` for unassigned cells; n must be one of the supported
//! perfect-square board sizes (4, 9, 16, 25).
//!
//! This file contains the main entry point and orchestrates parsing,
//! solving and reporting. The `csp` module holds the engine and the
//! `puzzle` module the file handling.

use crate::command_line::cli::{Cli, Commands, CommonOptions};
use crate::csp::backtracking::Backtracking;
use crate::csp::board::Board;
use crate::csp::node::Node;
use crate::csp::solver::{
    DefaultConfig, ForwardCheckingConfig, LeastConstrainingConfig, NoInferenceConfig,
    SearchStats, SolverConfig, SolverError, StaticForwardCheckingConfig, StaticNoInferenceConfig,
    StaticOrderConfig,
};
use crate::puzzle::source;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats as memory_stats};

mod command_line;
mod csp;
mod puzzle;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve {
            input,
            path,
            common,
        }) => {
            init_logger(common.debug);
            run_solve(input, path.or(cli.puzzles), &common);
        }
        Some(Commands::Experiment {
            path,
            seed,
            count,
            common,
        }) => {
            init_logger(common.debug);
            run_experiment(&path, seed, count, &common);
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
        None => {
            init_logger(cli.common.debug);
            match cli.puzzles {
                Some(path) => run_solve(None, Some(path), &cli.common),
                None => {
                    eprintln!("no puzzle given; see --help");
                    process::exit(2);
                }
            }
        }
    }
}

fn init_logger(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Solves an inline puzzle or every puzzle named by `path`.
fn run_solve(input: Option<String>, path: Option<PathBuf>, common: &CommonOptions) {
    if let Some(line) = input {
        solve_and_report(&line, common);
        return;
    }

    let Some(path) = path else {
        eprintln!("either --input or --path is required");
        process::exit(2);
    };

    let files = match source::collect_puzzle_files(&path) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            process::exit(1);
        }
    };

    for file in files {
        let puzzles = match source::read_puzzle_lines(&file) {
            Ok(puzzles) => puzzles,
            Err(err) => {
                eprintln!("{}: {err}", file.display());
                continue;
            }
        };
        for line in &puzzles {
            println!("puzzle: {line}");
            solve_and_report(line, common);
        }
    }
}

/// Reproduces the fixed-seed benchmark: sample `count` puzzles from the
/// collection at `path` with a seeded RNG, solve each, and report the
/// max/min/mean wall-clock time over the solved ones.
fn run_experiment(path: &Path, seed: u64, count: usize, common: &CommonOptions) {
    let puzzles = match source::read_puzzle_lines(path) {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            process::exit(1);
        }
    };
    if puzzles.is_empty() {
        eprintln!("{}: no puzzles found", path.display());
        process::exit(1);
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut max = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut total = Duration::ZERO;
    let mut solved = 0u32;

    for _ in 0..count {
        let line = &puzzles[rng.usize(..puzzles.len())];
        let node = match Node::from_line(line) {
            Ok(node) => node,
            Err(err) => {
                eprintln!("skipping {line}: {err}");
                continue;
            }
        };

        let start = Instant::now();
        match solve_node(node, common) {
            Ok((Some(_), _)) => {
                let elapsed = start.elapsed();
                max = max.max(elapsed);
                min = min.min(elapsed);
                total += elapsed;
                solved += 1;
            }
            Ok((None, _)) => println!("no solution: {line}"),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
    }

    if solved == 0 {
        println!("no sampled puzzle was solved");
    } else {
        println!(
            "solved {solved}/{count}; max: {max:?}, min: {min:?}, avg: {:?}",
            total / solved
        );
    }
}

/// Solves one puzzle line and prints the outcome per the common options.
fn solve_and_report(line: &str, common: &CommonOptions) {
    let node = match Node::from_line(line) {
        Ok(node) => node,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            return;
        }
    };

    let start = Instant::now();
    match solve_node(node, common) {
        Ok((Some(board), stats)) => {
            let elapsed = start.elapsed();
            println!("solved in {elapsed:?}");
            if common.print_solution {
                print!("{board}");
            }
            if common.stats {
                print_stats(stats);
            }
        }
        Ok((None, stats)) => {
            println!("no solution ({:?})", start.elapsed());
            if common.stats {
                print_stats(stats);
            }
        }
        Err(err) => eprintln!("error: {err}"),
    }
}

/// Dispatches to the solver configuration the common options select.
fn solve_node(
    node: Node,
    common: &CommonOptions,
) -> Result<(Option<Board>, SearchStats), SolverError> {
    if common.lcv {
        return run_config::<LeastConstrainingConfig>(node, common.depth_limit);
    }

    match (common.static_order, common.no_inference, common.forward_check) {
        (false, false, false) => run_config::<DefaultConfig>(node, common.depth_limit),
        (false, false, true) => run_config::<ForwardCheckingConfig>(node, common.depth_limit),
        (false, true, _) => run_config::<NoInferenceConfig>(node, common.depth_limit),
        (true, false, false) => run_config::<StaticOrderConfig>(node, common.depth_limit),
        (true, false, true) => {
            run_config::<StaticForwardCheckingConfig>(node, common.depth_limit)
        }
        (true, true, _) => run_config::<StaticNoInferenceConfig>(node, common.depth_limit),
    }
}

fn run_config<Config: SolverConfig>(
    node: Node,
    depth_limit: Option<usize>,
) -> Result<(Option<Board>, SearchStats), SolverError> {
    let mut solver = match depth_limit {
        Some(limit) => Backtracking::<Config>::with_depth_limit(node, limit),
        None => Backtracking::<Config>::new(node),
    };
    let board = solver.solve()?;
    Ok((board, solver.stats()))
}

fn print_stats(stats: SearchStats) {
    println!("{stats}");
    if let Some(allocated) = allocated_bytes() {
        println!("allocated: {} KiB", allocated / 1024);
    }
}

/// Current allocated bytes as reported by jemalloc, if available.
fn allocated_bytes() -> Option<usize> {
    epoch::advance().ok()?;
    memory_stats::allocated::read().ok()
}
