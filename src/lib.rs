#![deny(missing_docs)]
//! This crate solves n x n Sudoku puzzles (n a perfect square) by treating
//! each puzzle as a Constraint Satisfaction Problem: every cell is a
//! variable, its domain is the set of still-possible digits, and
//! row/column/box uniqueness are the constraints. Search is recursive
//! backtracking with configurable variable ordering (MRV or static scan
//! order) and configurable propagation (full MAC, single-pass forward
//! checking, or none).

/// The `csp` module implements the search-and-propagation engine.
pub mod csp;

/// The `puzzle` module reads line-oriented puzzle collections from disk.
pub mod puzzle;
