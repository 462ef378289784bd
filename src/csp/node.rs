#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! One point in the search tree: a board plus the candidate set of every
//! cell.
//!
//! Every recursive call of the backtracking driver operates on its own
//! exclusively-owned `Node`. `Clone` produces a complete independent copy,
//! so pruning performed in one branch can never leak into a sibling or the
//! parent. Branch copies are cheap: a board of bytes and one packed
//! [`DomainSet`] per cell.
//!
//! A freshly seeded node carries the puzzle givens purely as singleton
//! candidate sets; the board itself starts all-unassigned. The search then
//! commits the givens like any other decision, which is what lets the
//! propagation engine discover contradictions between givens.

use crate::csp::board::{Board, Size};
use crate::csp::domain::{Digit, DomainSet};
use crate::csp::variable::Variable;
use std::error::Error;
use std::fmt;

/// A `(Board, candidate sets)` pair representing one search-tree state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    state: Board,
    domains: Vec<DomainSet>,
}

/// Failure to construct a seed node from a puzzle line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePuzzleError {
    /// The line length is not one of the supported square board sizes.
    UnsupportedLength(usize),
    /// A character is not a base-36 digit.
    InvalidDigit {
        /// Offset of the offending character within the line.
        index: usize,
        /// The character found there.
        found: char,
    },
    /// A digit exceeds the board size n.
    ValueOutOfRange {
        /// Offset of the offending character within the line.
        index: usize,
        /// The decoded value.
        value: u32,
    },
}

impl fmt::Display for ParsePuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(len) => {
                write!(f, "puzzle length {len} is not a supported square board size")
            }
            Self::InvalidDigit { index, found } => {
                write!(f, "invalid digit {found:?} at offset {index}")
            }
            Self::ValueOutOfRange { index, value } => {
                write!(f, "value {value} at offset {index} exceeds the board size")
            }
        }
    }
}

impl Error for ParsePuzzleError {}

impl Node {
    /// Creates an all-unassigned node where every cell holds the full
    /// `[1, n]` candidate set.
    #[must_use]
    pub fn empty(size: Size) -> Self {
        Self {
            state: Board::empty(size),
            domains: vec![DomainSet::full(size); size.cells()],
        }
    }

    /// Seeds a root node from a single-line puzzle string: `n * n` base-36
    /// digit characters in row-major order, `0` meaning unassigned.
    ///
    /// Given cells receive a singleton candidate set holding their digit;
    /// unassigned cells receive the full `[1, n]` set. No other unary
    /// constraints are assumed. The board itself stays all-zero: the search
    /// assigns the givens, and propagation fires from each as it does.
    ///
    /// # Errors
    ///
    /// [`ParsePuzzleError`] if the length is not a supported square board
    /// size, or a character is not a base-36 digit in `[0, n]`.
    pub fn from_line(line: &str) -> Result<Self, ParsePuzzleError> {
        let line = line.trim();
        let len = line.chars().count();
        let size = Size::try_from(len.isqrt())
            .ok()
            .filter(|_| len.isqrt() * len.isqrt() == len)
            .ok_or(ParsePuzzleError::UnsupportedLength(len))?;

        let n = size as usize;
        let mut node = Self::empty(size);
        for (index, ch) in line.chars().enumerate() {
            let value = ch
                .to_digit(36)
                .ok_or(ParsePuzzleError::InvalidDigit { index, found: ch })?;
            if value as usize > n {
                return Err(ParsePuzzleError::ValueOutOfRange { index, value });
            }
            if value != 0 {
                #[allow(clippy::cast_possible_truncation)]
                let digit = value as Digit;
                node.domains[index] = DomainSet::singleton(digit);
            }
        }
        Ok(node)
    }

    /// The underlying board.
    #[must_use]
    pub const fn state(&self) -> &Board {
        &self.state
    }

    /// Consumes the node, returning its board.
    #[must_use]
    pub fn into_state(self) -> Board {
        self.state
    }

    /// Whether the cell at `var` is still unassigned on the board.
    #[must_use]
    pub fn is_open(&self, var: Variable) -> bool {
        self.state.value(var.row, var.col) == 0
    }

    /// Assigns `value` to the cell at `var` and collapses that cell's
    /// candidate set to the singleton `{value}`. No other cell is touched;
    /// propagation is a separate, explicit step.
    pub fn assign(&mut self, var: Variable, value: Digit) {
        self.state.set(var.row, var.col, value);
        self.domains[self.index(var)] = DomainSet::singleton(value);
    }

    /// The candidate set of the cell at `var`.
    #[must_use]
    pub fn good_values(&self, var: Variable) -> DomainSet {
        self.domains[self.index(var)]
    }

    /// Mutable access to the candidate set of the cell at `var`.
    /// Propagation shrinks domains in place through this.
    #[must_use]
    pub fn good_values_mut(&mut self, var: Variable) -> &mut DomainSet {
        let index = self.index(var);
        &mut self.domains[index]
    }

    fn index(&self, var: Variable) -> usize {
        var.row * self.state.size() as usize + var.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_domains() {
        let node = Node::from_line("1234000000000000").expect("puzzle parses");
        assert_eq!(node.state().size(), Size::Four);

        // Givens become singleton candidate sets; the board stays open.
        assert_eq!(
            node.good_values(Variable::new(0, 0)),
            DomainSet::singleton(1)
        );
        assert_eq!(
            node.good_values(Variable::new(0, 3)),
            DomainSet::singleton(4)
        );
        assert!(node.is_open(Variable::new(0, 0)));

        // Unassigned cells carry the full domain.
        assert_eq!(
            node.good_values(Variable::new(1, 0)),
            DomainSet::full(Size::Four)
        );
    }

    #[test]
    fn test_seed_rejects_bad_length() {
        assert_eq!(
            Node::from_line("123"),
            Err(ParsePuzzleError::UnsupportedLength(3))
        );
        // 36 characters is a perfect square of a non-square size (6x6).
        let line = "0".repeat(36);
        assert_eq!(
            Node::from_line(&line),
            Err(ParsePuzzleError::UnsupportedLength(36))
        );
    }

    #[test]
    fn test_seed_rejects_bad_digit() {
        assert_eq!(
            Node::from_line("12340000000000!0"),
            Err(ParsePuzzleError::InvalidDigit {
                index: 14,
                found: '!'
            })
        );
        assert_eq!(
            Node::from_line("9000000000000000"),
            Err(ParsePuzzleError::ValueOutOfRange { index: 0, value: 9 })
        );
    }

    #[test]
    fn test_assign_collapses_domain() {
        let mut node = Node::empty(Size::Four);
        let var = Variable::new(2, 1);
        node.assign(var, 3);

        assert!(!node.is_open(var));
        assert_eq!(node.state().value(2, 1), 3);
        assert_eq!(node.good_values(var), DomainSet::singleton(3));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Node::from_line("0000000000000000").expect("puzzle parses");
        let mut copy = original.clone();

        copy.assign(Variable::new(0, 0), 2);
        copy.good_values_mut(Variable::new(3, 3)).remove(4);

        assert!(original.is_open(Variable::new(0, 0)));
        assert_eq!(
            original.good_values(Variable::new(3, 3)),
            DomainSet::full(Size::Four)
        );
        assert_ne!(original, copy);
    }
}
