#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The recursive backtracking driver.
//!
//! This module provides the [`Backtracking`] struct, the depth-first
//! search loop that ties the ordering heuristics and the propagation
//! engine together. Each recursion level:
//!
//! 1. Fails if the depth limit is exceeded (a safety valve against
//!    pathological recursion, not a correctness requirement).
//! 2. Succeeds if the node is filled and valid; fails if filled but
//!    invalid (which only happens when propagation is disabled).
//! 3. Otherwise picks a variable, enumerates its candidate values in
//!    order, and for each value clones the node, assigns, propagates and
//!    recurses. The first success is returned immediately; a failed value
//!    discards its clone and the next one is tried.
//! 4. Fails once every value is exhausted, which backtracks the caller.
//!
//! Backtracking is implicit in the clone-per-branch discipline: sibling
//! branches never share mutable state, so abandoning a branch is simply
//! dropping its node. The driver is generic over a [`SolverConfig`],
//! letting the variable selector, value selector and propagator be
//! swapped without touching the search loop.

use crate::csp::board::Board;
use crate::csp::node::Node;
use crate::csp::propagation::Inference;
use crate::csp::solver::{DefaultConfig, SearchStats, SolverConfig, SolverError};
use crate::csp::value_selection::ValueSelection;
use crate::csp::variable_selection::VariableSelection;
use log::{debug, trace};

/// Depth-first backtracking search over one puzzle, parameterised by the
/// strategy types of `Config`.
#[derive(Debug, Clone)]
pub struct Backtracking<Config: SolverConfig = DefaultConfig> {
    /// The seed node the search starts from.
    root: Node,
    /// Recursion depth bound; a level deeper than this fails silently.
    depth_limit: usize,
    /// The variable ordering strategy.
    selector: Config::VariableSelector,
    /// The value ordering strategy.
    values: Config::ValueSelector,
    /// The propagation strategy run after each assignment.
    propagator: Config::Propagator,
    /// Counters for the current/most recent `solve` call.
    stats: SearchStats,
}

impl<Config: SolverConfig> Backtracking<Config> {
    /// Creates a driver for `root` with the default depth limit of
    /// n * n + 1, enough to assign every cell of the board.
    #[must_use]
    pub fn new(root: Node) -> Self {
        let n = root.state().size() as usize;
        Self::with_depth_limit(root, n * n + 1)
    }

    /// Creates a driver with an explicit recursion depth limit.
    #[must_use]
    pub fn with_depth_limit(root: Node, depth_limit: usize) -> Self {
        Self {
            root,
            depth_limit,
            selector: Config::VariableSelector::default(),
            values: Config::ValueSelector::default(),
            propagator: Config::Propagator::default(),
            stats: SearchStats::default(),
        }
    }

    /// The counters collected by the most recent [`solve`](Self::solve).
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Runs the search.
    ///
    /// Returns `Ok(Some(board))` for the first solution found in
    /// depth-first order, `Ok(None)` when the puzzle is unsolvable or the
    /// depth limit cut the search off.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnsupportedValueOrdering`] when the configured value
    /// ordering has no implementation.
    pub fn solve(&mut self) -> Result<Option<Board>, SolverError> {
        self.stats = SearchStats::default();
        let root = self.root.clone();
        let solved = self.search(root, 0)?;
        debug!(
            "search {}: {}",
            if solved.is_some() { "solved" } else { "exhausted" },
            self.stats
        );
        Ok(solved.map(Node::into_state))
    }

    fn search(&mut self, node: Node, depth: usize) -> Result<Option<Node>, SolverError> {
        if depth > self.depth_limit {
            trace!("depth limit {} exceeded", self.depth_limit);
            return Ok(None);
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if node.state().is_filled() {
            // Filled but invalid only occurs with propagation disabled.
            return Ok(node.state().is_solved().then_some(node));
        }

        let Some(var) = self.selector.pick(&node) else {
            return Ok(None);
        };

        for value in self.values.order(&node, var)? {
            let mut branch = node.clone();
            branch.assign(var, value);
            self.stats.decisions += 1;
            self.stats.propagations += 1;

            if self.propagator.infer(&mut branch, var) {
                if let Some(solved) = self.search(branch, depth + 1)? {
                    return Ok(Some(solved));
                }
            }
            // The branch clone is dropped here; siblings never observe its
            // pruning.
        }

        self.stats.backtracks += 1;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::solver::{
        ForwardCheckingConfig, LeastConstrainingConfig, NoInferenceConfig,
        StaticForwardCheckingConfig, StaticOrderConfig,
    };

    const EMPTY_FOUR: &str = "0000000000000000";
    const SOLVED_FOUR: &str = "1234341221434321";

    fn solve_with<Config: SolverConfig>(line: &str) -> Option<Board> {
        let node = Node::from_line(line).expect("puzzle parses");
        Backtracking::<Config>::new(node)
            .solve()
            .expect("configuration is supported")
    }

    #[test]
    fn test_empty_four_by_four_solves() {
        let board = solve_with::<DefaultConfig>(EMPTY_FOUR).expect("solvable");
        assert!(board.is_filled());
        assert!(board.is_solved());
    }

    #[test]
    fn test_prefilled_row_is_preserved() {
        let board = solve_with::<DefaultConfig>("1234000000000000").expect("solvable");
        assert!(board.is_solved());
        assert_eq!(
            (0..4).map(|col| board.value(0, col)).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_contradictory_input_has_no_solution() {
        assert_eq!(solve_with::<DefaultConfig>("1100000000000000"), None);
    }

    #[test]
    fn test_contradictory_input_fails_with_static_order_too() {
        assert_eq!(solve_with::<StaticOrderConfig>("1100000000000000"), None);
    }

    #[test]
    fn test_presolved_input_round_trips() {
        let board = solve_with::<DefaultConfig>(SOLVED_FOUR).expect("solvable");
        assert_eq!(board.as_line(), SOLVED_FOUR);
    }

    #[test]
    fn test_depth_limit_cuts_search_off() {
        let node = Node::from_line(EMPTY_FOUR).expect("puzzle parses");
        let mut limited = Backtracking::<DefaultConfig>::with_depth_limit(node.clone(), 1);
        assert_eq!(limited.solve().expect("configuration is supported"), None);

        // The same puzzle solves under the default limit.
        let mut unlimited = Backtracking::<DefaultConfig>::new(node);
        assert!(
            unlimited
                .solve()
                .expect("configuration is supported")
                .is_some()
        );
    }

    #[test]
    fn test_propagation_strength_does_not_change_solvability() {
        for line in [EMPTY_FOUR, "1234000000000000", "1100000000000000"] {
            let mac = solve_with::<DefaultConfig>(line);
            let forward = solve_with::<ForwardCheckingConfig>(line);
            let static_forward = solve_with::<StaticForwardCheckingConfig>(line);
            assert_eq!(mac.is_some(), forward.is_some(), "puzzle {line}");
            assert_eq!(mac.is_some(), static_forward.is_some(), "puzzle {line}");
        }
    }

    #[test]
    fn test_no_inference_agrees_on_nearly_filled_boards() {
        // Two open cells, so the inference-free search stays tiny.
        let solvable = "1234341221404301";
        assert_eq!(
            solve_with::<DefaultConfig>(solvable).map(|board| board.as_line()),
            solve_with::<NoInferenceConfig>(solvable).map(|board| board.as_line()),
        );

        // A row conflict between givens, discovered at the leaves when
        // propagation is off.
        let contradictory = "1134341221430021";
        assert_eq!(solve_with::<DefaultConfig>(contradictory), None);
        assert_eq!(solve_with::<NoInferenceConfig>(contradictory), None);
    }

    #[test]
    fn test_least_constraining_fails_fast() {
        let node = Node::from_line(EMPTY_FOUR).expect("puzzle parses");
        assert_eq!(
            Backtracking::<LeastConstrainingConfig>::new(node).solve(),
            Err(SolverError::UnsupportedValueOrdering)
        );
    }

    #[test]
    fn test_stats_are_collected() {
        let node = Node::from_line("1234000000000000").expect("puzzle parses");
        let mut solver = Backtracking::<DefaultConfig>::new(node);
        solver.solve().expect("configuration is supported");

        let stats = solver.stats();
        assert!(stats.decisions >= 16);
        assert_eq!(stats.decisions, stats.propagations);
        assert!(stats.max_depth >= 16);
    }

    #[test]
    fn test_nine_by_nine_end_to_end() {
        let line = "000020040008035000000070602031046970200000000000501203049000730000000010800004000";
        let board = solve_with::<DefaultConfig>(line).expect("solvable");
        assert!(board.is_solved());

        // Givens survive into the solution.
        assert_eq!(board.value(0, 4), 2);
        assert_eq!(board.value(8, 0), 8);
        assert_eq!(board.value(8, 5), 4);
    }

    #[test]
    fn test_nine_by_nine_forward_checking_agrees() {
        let line = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let mac = solve_with::<DefaultConfig>(line).expect("solvable");
        let forward = solve_with::<ForwardCheckingConfig>(line).expect("solvable");
        assert!(mac.is_solved());
        assert!(forward.is_solved());
    }
}
