use crate::autograd::backward_op::propagate;
use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this value.
    ///
    /// Seeds `self.grad = 1.0`, orders every reachable node so that operands
    /// come before their consumers, then replays each node's propagation rule
    /// in reverse order. By the time a node propagates, every consumer has
    /// already pushed its contribution into that node's `grad`.
    ///
    /// Gradients of all other nodes are accumulated, never overwritten: calling
    /// `backward` twice on the same graph doubles the leaf gradients. Reset them
    /// first with [`crate::autograd::zero_grad_graph`] or an optimizer's
    /// `zero_grad` when that is not wanted.
    pub fn backward(&self) {
        let sorted = topological_sort(self);
        log::debug!("backward: propagating through {} nodes", sorted.len());
        self.set_grad(1.0);
        for node in sorted.iter().rev() {
            propagate(node);
        }
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}
