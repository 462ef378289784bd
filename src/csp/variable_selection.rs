#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Variable ordering: which unassigned cell the driver decides next.

use crate::csp::node::Node;
use crate::csp::variable::Variable;

/// Picks the next decision variable for the backtracking driver.
pub trait VariableSelection {
    /// The next unassigned cell to branch on, or `None` when every cell is
    /// assigned. The driver checks `is_filled` before calling this, so the
    /// `None` path is not reached in normal operation.
    fn pick(&self, node: &Node) -> Option<Variable>;
}

/// Minimum-Remaining-Values: the unassigned cell with the smallest
/// candidate set. Ties resolve to the first such cell in row-major scan
/// order (strictly smaller wins, equal never displaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn pick(&self, node: &Node) -> Option<Variable> {
        let n = node.state().size() as usize;
        let mut best: Option<(usize, Variable)> = None;

        for row in 0..n {
            for col in 0..n {
                let var = Variable::new(row, col);
                if !node.is_open(var) {
                    continue;
                }
                let len = node.good_values(var).len();
                if best.is_none_or(|(smallest, _)| len < smallest) {
                    best = Some((len, var));
                }
            }
        }

        best.map(|(_, var)| var)
    }
}

/// Static ordering: the first unassigned cell in row-major scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn pick(&self, node: &Node) -> Option<Variable> {
        let n = node.state().size() as usize;
        (0..n)
            .flat_map(|row| (0..n).map(move |col| Variable::new(row, col)))
            .find(|&var| node.is_open(var))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::board::Size;
    use crate::csp::domain::DomainSet;

    #[test]
    fn test_mrv_picks_smallest_domain() {
        let mut node = Node::empty(Size::Four);
        *node.good_values_mut(Variable::new(2, 3)) = [1, 4].into_iter().collect();
        *node.good_values_mut(Variable::new(3, 0)) = DomainSet::singleton(2);

        assert_eq!(
            MinimumRemainingValues.pick(&node),
            Some(Variable::new(3, 0))
        );
    }

    #[test]
    fn test_mrv_ties_break_row_major() {
        let mut node = Node::empty(Size::Four);
        *node.good_values_mut(Variable::new(1, 2)) = [1, 3].into_iter().collect();
        *node.good_values_mut(Variable::new(2, 0)) = [2, 4].into_iter().collect();

        // Both have two candidates; (1, 2) is seen first in row-major scan.
        assert_eq!(MinimumRemainingValues.pick(&node), Some(Variable::new(1, 2)));
    }

    #[test]
    fn test_mrv_result_is_minimal() {
        let node = Node::from_line("1234000000000000").expect("puzzle parses");
        let picked = MinimumRemainingValues
            .pick(&node)
            .expect("board has open cells");
        let smallest = picked;
        let n = node.state().size() as usize;
        for row in 0..n {
            for col in 0..n {
                let var = Variable::new(row, col);
                if node.is_open(var) {
                    assert!(
                        node.good_values(smallest).len() <= node.good_values(var).len()
                    );
                }
            }
        }
    }

    #[test]
    fn test_fixed_order_first_open() {
        let mut node = Node::empty(Size::Four);
        node.assign(Variable::new(0, 0), 1);
        node.assign(Variable::new(0, 1), 2);

        assert_eq!(FixedOrder.pick(&node), Some(Variable::new(0, 2)));
    }

    #[test]
    fn test_none_on_filled_board() {
        let mut node = Node::empty(Size::Four);
        let solution = [1, 2, 3, 4, 3, 4, 1, 2, 2, 1, 4, 3, 4, 3, 2, 1];
        for (index, &value) in solution.iter().enumerate() {
            node.assign(Variable::new(index / 4, index % 4), value);
        }

        assert_eq!(MinimumRemainingValues.pick(&node), None);
        assert_eq!(FixedOrder.pick(&node), None);
    }
}
