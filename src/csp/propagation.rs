#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Arc-consistency propagation over the row/column/box constraint graph.
//!
//! The primitive is [`enforce_arc`]: a deliberately restricted consistency
//! step that only prunes when the head's domain has collapsed to a single
//! digit. Two strategies are built on top of it:
//!
//! 1. [`ForwardChecking`]: a single pass over the neighbours of the cell
//!    that was just assigned. It prunes direct neighbours only and does not
//!    cascade when a neighbour itself collapses to a singleton.
//! 2. [`Mac`]: Maintaining Arc Consistency. A FIFO worklist of arcs,
//!    seeded from the assigned cell's neighbourhood; whenever a domain
//!    shrinks, fresh arcs from that cell to each of its own open neighbours
//!    are enqueued, so pruning cascades outward until a fixed point (or an
//!    emptied domain proves the branch unsolvable).
//!
//! Both report the same thing: whether the branch is still solvable as far
//! as propagation can tell. [`NoInference`] is the switched-off variant
//! that always reports solvable.

use crate::csp::node::Node;
use crate::csp::variable::Variable;
use log::trace;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// A directed constraint edge: propagate `head`'s domain onto `tail`'s.
/// Arcs are processed head-to-tail only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    /// The constraining endpoint.
    pub head: Variable,
    /// The endpoint whose domain may shrink.
    pub tail: Variable,
}

/// Arc-consistency step: if `head`'s candidate set is a singleton `{v}` and
/// `tail` still holds `v`, remove `v` from `tail` and report `true`.
/// Reports `false` in every other case; in particular, a head with two or
/// more candidates never prunes anything.
pub fn enforce_arc(node: &mut Node, head: Variable, tail: Variable) -> bool {
    let Some(value) = node.good_values(head).single() else {
        return false;
    };
    let tail_values = node.good_values_mut(tail);
    if tail_values.contains(value) {
        tail_values.remove(value);
        trace!("pruned {value} from {tail} via {head}");
        return true;
    }
    false
}

/// The open (still-unassigned) cells sharing `var`'s row, column or box,
/// excluding `var` itself. Already-assigned cells are excluded too: their
/// singleton domains are fixed and impose no further pruning need.
#[must_use]
pub fn connected_open_variables(node: &Node, var: Variable) -> FxHashSet<Variable> {
    let n = node.state().size() as usize;
    let m = node.state().size().block_size();
    let mut vars = FxHashSet::default();

    for i in 0..n {
        let row_cell = Variable::new(var.row, i);
        if node.is_open(row_cell) {
            vars.insert(row_cell);
        }
        let col_cell = Variable::new(i, var.col);
        if node.is_open(col_cell) {
            vars.insert(col_cell);
        }
    }

    let box_row = var.row - var.row % m;
    let box_col = var.col - var.col % m;
    for i in 0..m {
        for j in 0..m {
            let box_cell = Variable::new(box_row + i, box_col + j);
            if node.is_open(box_cell) {
                vars.insert(box_cell);
            }
        }
    }

    vars.remove(&var);
    vars
}

/// A propagation strategy run after each assignment.
///
/// Implementations shrink candidate sets in place and report whether the
/// branch is still solvable as far as they can tell. Which implementation
/// runs is a configuration choice made when the solver is constructed, not
/// runtime state.
pub trait Inference {
    /// Propagates the consequences of the assignment just made at `var`.
    /// Returns `false` iff some cell's candidate set was emptied.
    fn infer(&self, node: &mut Node, var: Variable) -> bool;
}

/// Propagation switched off entirely: every call reports solvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoInference;

impl Inference for NoInference {
    fn infer(&self, _node: &mut Node, _var: Variable) -> bool {
        true
    }
}

/// Single-level forward checking: one arc from the assigned cell to each of
/// its connected open variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForwardChecking;

impl Inference for ForwardChecking {
    fn infer(&self, node: &mut Node, var: Variable) -> bool {
        let mut solvable = true;
        // Every tail is checked even after a failure is seen; this pass
        // never exits early.
        for tail in connected_open_variables(node, var) {
            if enforce_arc(node, var, tail) && node.good_values(tail).is_empty() {
                solvable = false;
            }
        }
        solvable
    }
}

/// Full Maintaining-Arc-Consistency propagation via a FIFO worklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mac;

impl Inference for Mac {
    fn infer(&self, node: &mut Node, var: Variable) -> bool {
        let mut arcs: VecDeque<Arc> = connected_open_variables(node, var)
            .into_iter()
            .map(|tail| Arc { head: var, tail })
            .collect();

        // Arcs are processed in first-seen order. No de-duplication is
        // performed; a re-enqueued arc whose work is already done simply
        // reports unmodified and is dropped.
        while let Some(arc) = arcs.pop_front() {
            if enforce_arc(node, arc.head, arc.tail) {
                if node.good_values(arc.tail).is_empty() {
                    return false;
                }
                arcs.extend(
                    connected_open_variables(node, arc.tail)
                        .into_iter()
                        .map(|neighbour| Arc {
                            head: arc.tail,
                            tail: neighbour,
                        }),
                );
            }
        }
        true
    }
}
