#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Solver configuration and top-level entry points.
//!
//! A configuration is a set of strategy types threaded through the
//! [`Backtracking`] driver's constructor, never ambient global state:
//! two solves with different configurations can run side by side without
//! interfering. The [`SolverConfig`] trait names the three seams (variable
//! ordering, value ordering and propagation) and the concrete configs below
//! enumerate the supported combinations.

use crate::csp::backtracking::Backtracking;
use crate::csp::board::Board;
use crate::csp::node::{Node, ParsePuzzleError};
use crate::csp::propagation::{ForwardChecking, Inference, Mac, NoInference};
use crate::csp::value_selection::{DomainOrder, LeastConstraining, ValueSelection};
use crate::csp::variable_selection::{FixedOrder, MinimumRemainingValues, VariableSelection};
use std::error::Error;
use std::fmt;

/// The strategy types a solve runs with.
pub trait SolverConfig {
    /// Which unassigned cell to decide next.
    type VariableSelector: VariableSelection + Clone + fmt::Debug + Default;
    /// The order candidate values are tried in.
    type ValueSelector: ValueSelection + Clone + fmt::Debug + Default;
    /// The propagation run after each assignment.
    type Propagator: Inference + Clone + fmt::Debug + Default;
}

/// The default configuration: MRV variable ordering, unordered domain
/// enumeration, full MAC propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueSelector = DomainOrder;
    type Propagator = Mac;
}

/// MRV with single-pass forward checking instead of MAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForwardCheckingConfig;

impl SolverConfig for ForwardCheckingConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueSelector = DomainOrder;
    type Propagator = ForwardChecking;
}

/// MRV with propagation switched off entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoInferenceConfig;

impl SolverConfig for NoInferenceConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueSelector = DomainOrder;
    type Propagator = NoInference;
}

/// Static row-major variable ordering with MAC propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticOrderConfig;

impl SolverConfig for StaticOrderConfig {
    type VariableSelector = FixedOrder;
    type ValueSelector = DomainOrder;
    type Propagator = Mac;
}

/// Static variable ordering with forward checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticForwardCheckingConfig;

impl SolverConfig for StaticForwardCheckingConfig {
    type VariableSelector = FixedOrder;
    type ValueSelector = DomainOrder;
    type Propagator = ForwardChecking;
}

/// Static variable ordering with propagation switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticNoInferenceConfig;

impl SolverConfig for StaticNoInferenceConfig {
    type VariableSelector = FixedOrder;
    type ValueSelector = DomainOrder;
    type Propagator = NoInference;
}

/// MRV with the unimplemented least-constraining-value ordering. Any solve
/// with this configuration fails on its first decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeastConstrainingConfig;

impl SolverConfig for LeastConstrainingConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueSelector = LeastConstraining;
    type Propagator = Mac;
}

/// A hard solver failure. Negative search outcomes are not errors: an
/// unsolvable puzzle is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// The least-constraining-value ordering was selected; it has no
    /// implementation contract. Fatal to the call, not recoverable.
    UnsupportedValueOrdering,
    /// The puzzle line could not be parsed into a seed node.
    InvalidPuzzle(ParsePuzzleError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedValueOrdering => {
                write!(f, "least-constraining-value ordering is not implemented")
            }
            Self::InvalidPuzzle(err) => write!(f, "invalid puzzle: {err}"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedValueOrdering => None,
            Self::InvalidPuzzle(err) => Some(err),
        }
    }
}

impl From<ParsePuzzleError> for SolverError {
    fn from(err: ParsePuzzleError) -> Self {
        Self::InvalidPuzzle(err)
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Assignments tried (one per cloned branch).
    pub decisions: usize,
    /// Propagation passes run.
    pub propagations: usize,
    /// Decision points that exhausted every candidate value.
    pub backtracks: usize,
    /// Deepest recursion level reached.
    pub max_depth: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decisions: {}, propagations: {}, backtracks: {}, max depth: {}",
            self.decisions, self.propagations, self.backtracks, self.max_depth
        )
    }
}

/// Parses a single-line puzzle and solves it with [`DefaultConfig`].
///
/// Returns `Ok(Some(board))` with a filled, valid board for solvable
/// puzzles and `Ok(None)` for unsolvable ones.
///
/// # Errors
///
/// [`SolverError::InvalidPuzzle`] when the line is not a well-formed
/// puzzle string.
pub fn solve_line(line: &str) -> Result<Option<Board>, SolverError> {
    let node = Node::from_line(line)?;
    Backtracking::<DefaultConfig>::new(node).solve()
}
