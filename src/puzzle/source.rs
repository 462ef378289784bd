#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A line-oriented puzzle source.
//!
//! Puzzle collections are plain text files with one puzzle per line: `n * n`
//! base-36 digit characters in row-major order, `0` for unassigned cells.
//! Blank lines and lines starting with `#` are skipped. A directory can
//! stand in for a single file; every regular file under it is read.

use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A 4x4 example puzzle.
pub const EXAMPLE_FOUR: &str = "0200000203404000";

/// A 9x9 example puzzle.
pub const EXAMPLE_NINE: &str =
    "000020040008035000000070602031046970200000000000501203049000730000000010800004000";

/// Reads every puzzle line from a single file, skipping blank lines and
/// `#` comments.
///
/// # Errors
///
/// Returns `io::Result::Err` if the file cannot be opened or a line cannot
/// be read.
pub fn read_puzzle_lines(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut puzzles = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        puzzles.push(trimmed.to_string());
    }
    Ok(puzzles)
}

/// Resolves `path` to the puzzle files it names: the path itself when it is
/// a regular file, otherwise every regular file under the directory in
/// sorted order.
///
/// # Errors
///
/// Returns `io::Result::Err` if the directory walk fails.
pub fn collect_puzzle_files(path: &Path) -> io::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(io::Error::other)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files.into_iter().sorted().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::board::Size;
    use crate::csp::node::Node;

    #[test]
    fn test_example_puzzles_parse() {
        let four = Node::from_line(EXAMPLE_FOUR).expect("example parses");
        assert_eq!(four.state().size(), Size::Four);

        let nine = Node::from_line(EXAMPLE_NINE).expect("example parses");
        assert_eq!(nine.state().size(), Size::Nine);
    }

    #[test]
    fn test_read_puzzle_lines_skips_comments() {
        let dir = std::env::temp_dir();
        let path = dir.join("sudoku_csp_source_test.txt");
        std::fs::write(&path, "# header\n\n0000000000000000\n 1234000000000000 \n")
            .expect("temp file writes");

        let puzzles = read_puzzle_lines(&path).expect("file reads");
        assert_eq!(
            puzzles,
            vec![
                "0000000000000000".to_string(),
                "1234000000000000".to_string()
            ]
        );

        std::fs::remove_file(&path).ok();
    }
}
