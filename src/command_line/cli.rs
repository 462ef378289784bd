#![allow(dead_code, clippy::struct_excessive_bools)]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Defines the command-line interface for the Sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-csp", version, about = "A configurable CSP Sudoku solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a line-oriented puzzle file to solve.
    #[arg(global = true)]
    pub puzzles: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `solve`, `experiment`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the Sudoku solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve puzzles given inline or from a puzzle file.
    Solve {
        /// A single puzzle as an inline string of row-major digits
        /// (e.g. "0200000203404000").
        #[arg(short, long)]
        input: Option<String>,

        /// Path to a puzzle file with one puzzle per line, or a directory
        /// of such files.
        #[arg(long)]
        path: Option<PathBuf>,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Run the fixed-seed benchmark: sample puzzles from a file with a
    /// seeded RNG, solve each, and report aggregate timings.
    Experiment {
        /// Path to the puzzle file to sample from.
        #[arg(long)]
        path: PathBuf,

        /// Seed for the sampling RNG; the same seed replays the same
        /// puzzle selection.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// How many puzzles to sample and solve.
        #[arg(long, default_value_t = 50)]
        count: usize,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the
    /// solving process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable printing of search statistics after solving.
    #[arg(long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the solved grid.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    /// Use the static row-major variable ordering instead of MRV.
    #[arg(long, default_value_t = false)]
    pub(crate) static_order: bool,

    /// Use single-pass forward checking instead of full MAC propagation.
    #[arg(long, default_value_t = false)]
    pub(crate) forward_check: bool,

    /// Disable constraint propagation entirely.
    #[arg(long, default_value_t = false)]
    pub(crate) no_inference: bool,

    /// Use the least-constraining-value ordering. Unimplemented; fails
    /// fast when enabled.
    #[arg(long, default_value_t = false)]
    pub(crate) lcv: bool,

    /// Recursion depth limit; defaults to n * n + 1 for an n x n board.
    #[arg(long)]
    pub(crate) depth_limit: Option<usize>,
}
