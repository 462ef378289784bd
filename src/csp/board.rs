#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board: an n x n grid of assigned values, where `0` marks a cell the
//! search has not decided yet.
//!
//! Only sizes whose box side is an integer are representable: the [`Size`]
//! enum closes over the perfect-square board sizes, so every constructed
//! board partitions cleanly into n rows, n columns and n boxes of n cells.

use crate::csp::domain::Digit;
use bit_vec::BitVec;
use std::fmt;

/// A supported board size n. The grid is n x n and boxes are m x m with
/// m = sqrt(n), so n must be a perfect square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    /// A 4x4 board with 2x2 boxes.
    Four = 4,
    /// The classic 9x9 board with 3x3 boxes.
    Nine = 9,
    /// A 16x16 board with 4x4 boxes.
    Sixteen = 16,
    /// A 25x25 board with 5x5 boxes.
    TwentyFive = 25,
}

impl TryFrom<usize> for Size {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            9 => Ok(Self::Nine),
            16 => Ok(Self::Sixteen),
            25 => Ok(Self::TwentyFive),
            _ => Err(()),
        }
    }
}

impl From<Size> for usize {
    fn from(size: Size) -> Self {
        size as Self
    }
}

impl Size {
    /// The box side m = sqrt(n).
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Nine => 3,
            Self::Sixteen => 4,
            Self::TwentyFive => 5,
        }
    }

    /// Total number of cells, n * n.
    #[must_use]
    pub const fn cells(self) -> usize {
        (self as usize) * (self as usize)
    }
}

/// An n x n grid of cell values in `[0, n]`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: Size,
    cells: Vec<Digit>,
}

impl Board {
    /// Creates an all-unassigned board of the given size.
    #[must_use]
    pub fn empty(size: Size) -> Self {
        Self {
            size,
            cells: vec![0; size.cells()],
        }
    }

    /// The board size n.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The value at `(row, col)`; `0` if unassigned.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Digit {
        self.cells[row * self.size as usize + col]
    }

    /// Writes `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Digit) {
        self.cells[row * self.size as usize + col] = value;
    }

    /// Whether every cell holds a value in `[1, n]`.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Whether the board is filled and every row, column and box contains
    /// each digit `1..=n` exactly once. This is the full validity check,
    /// not merely "no zeros remain".
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let n = self.size as usize;
        let m = self.size.block_size();

        (0..n).all(|row| self.group_solved((0..n).map(move |col| (row, col))))
            && (0..n).all(|col| self.group_solved((0..n).map(move |row| (row, col))))
            && (0..n).step_by(m).all(|box_row| {
                (0..n).step_by(m).all(|box_col| {
                    self.group_solved(
                        (0..m).flat_map(move |i| (0..m).map(move |j| (box_row + i, box_col + j))),
                    )
                })
            })
    }

    /// Checks one constraint group of n cells for "each digit exactly once".
    fn group_solved(&self, group: impl Iterator<Item = (usize, usize)>) -> bool {
        let n = self.size as usize;
        let mut seen = BitVec::from_elem(n + 1, false);
        for (row, col) in group {
            let value = self.value(row, col) as usize;
            if value == 0 || value > n || seen[value] {
                return false;
            }
            seen.set(value, true);
        }
        true
    }

    /// Renders the board as a single row-major line of base-36 digits, the
    /// same shape the puzzle input uses.
    #[must_use]
    pub fn as_line(&self) -> String {
        self.cells
            .iter()
            .map(|&value| char::from_digit(u32::from(value), 36).unwrap_or('?'))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as usize;
        let width = if n > 9 { 2 } else { 1 };
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }
                let value = self.value(row, col);
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
