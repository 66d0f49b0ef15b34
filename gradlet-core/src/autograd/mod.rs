//! Reverse-mode differentiation over the graph of [`Value`]s.
//!
//! - [`graph`]: topological ordering and read-only graph tracing.
//! - [`backward_op`]: the per-operation local derivative rules.
//! - [`grad_check`]: finite-difference verification of those rules.
//!
//! The backward pass itself is [`Value::backward`].

use crate::value::Value;

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use graph::{topological_sort, trace};

/// Resets the gradient of every node reachable from `root` to zero.
///
/// Parameters shared with other graphs are reset too, since they are the
/// same nodes.
pub fn zero_grad_graph(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}
