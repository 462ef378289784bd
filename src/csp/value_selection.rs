#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Value ordering: the order in which a decision variable's candidate
//! values are tried.

use crate::csp::domain::Digit;
use crate::csp::node::Node;
use crate::csp::solver::SolverError;
use crate::csp::variable::Variable;
use smallvec::SmallVec;

/// The candidate values of one decision, in the order they will be tried.
/// Inlined up to the classic board's domain width.
pub type DomainValues = SmallVec<[Digit; 9]>;

/// Orders the candidate values of a decision variable.
pub trait ValueSelection {
    /// The values to try for `var`, in order.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnsupportedValueOrdering`] when the strategy has no
    /// implementation contract (see [`LeastConstraining`]).
    fn order(&self, node: &Node, var: Variable) -> Result<DomainValues, SolverError>;
}

/// Plain enumeration of the current candidate set. No value-ordering
/// heuristic is applied; values come out in the set's iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainOrder;

impl ValueSelection for DomainOrder {
    fn order(&self, node: &Node, var: Variable) -> Result<DomainValues, SolverError> {
        Ok(node.good_values(var).iter().collect())
    }
}

/// Least-constraining-value ordering. A named extension point with no
/// implementation contract: selecting it fails fast rather than silently
/// falling back to [`DomainOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeastConstraining;

impl ValueSelection for LeastConstraining {
    fn order(&self, _node: &Node, _var: Variable) -> Result<DomainValues, SolverError> {
        Err(SolverError::UnsupportedValueOrdering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::board::Size;

    #[test]
    fn test_domain_order_enumerates_candidates() {
        let mut node = Node::empty(Size::Four);
        let var = Variable::new(1, 1);
        *node.good_values_mut(var) = [3, 1].into_iter().collect();

        let values = DomainOrder.order(&node, var).expect("ordering succeeds");
        assert_eq!(values.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_least_constraining_is_unsupported() {
        let node = Node::empty(Size::Four);
        assert_eq!(
            LeastConstraining.order(&node, Variable::new(0, 0)),
            Err(SolverError::UnsupportedValueOrdering)
        );
    }
}
