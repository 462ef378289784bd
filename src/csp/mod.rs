#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint-satisfaction engine: board state, candidate domains,
//! propagation, ordering heuristics and the backtracking driver.

/// The recursive backtracking search driver.
pub mod backtracking;
/// Board state and the supported board sizes.
pub mod board;
/// Per-cell candidate sets.
pub mod domain;
/// Search-tree nodes with copy-on-branch semantics.
pub mod node;
/// Arc-consistency propagation strategies.
pub mod propagation;
/// Solver configuration, errors, statistics and entry points.
pub mod solver;
/// Value ordering strategies.
pub mod value_selection;
/// Cell-coordinate variables.
pub mod variable;
/// Variable ordering strategies.
pub mod variable_selection;
