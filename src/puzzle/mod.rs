#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Puzzle I/O: reading line-oriented puzzle collections from disk.

/// Line-oriented puzzle sources and bundled example puzzles.
pub mod source;
