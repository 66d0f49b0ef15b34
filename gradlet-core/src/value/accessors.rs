// src/value/accessors.rs
use crate::error::GradletError;
use crate::value::{NodeId, Value};
use crate::value_data::Op;
use std::collections::HashSet;

impl Value {
    /// Returns the cached forward value. Never recomputes anything.
    pub fn value(&self) -> f64 {
        self.borrow_data().value
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.borrow_data().grad
    }

    /// Returns the operation that produced this node.
    pub fn op(&self) -> Op {
        self.borrow_data().op
    }

    /// Returns a clone of the diagnostic label.
    pub fn label(&self) -> String {
        self.borrow_data().label.clone()
    }

    /// Returns `true` for nodes constructed directly from a number.
    pub fn is_leaf(&self) -> bool {
        self.borrow_data().op == Op::Leaf
    }

    /// Operands in call order; `a * a` yields the same handle twice.
    pub fn operands(&self) -> Vec<Value> {
        self.borrow_data().operands.clone()
    }

    /// The set of distinct nodes this one was computed from.
    ///
    /// Unlike [`Value::operands`], repeated operands appear once. The order is
    /// the first-occurrence order of the operands.
    pub fn predecessors(&self) -> Vec<Value> {
        let data = self.borrow_data();
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(data.operands.len());
        data.operands
            .iter()
            .filter(|v| seen.insert(v.id()))
            .cloned()
            .collect()
    }

    /// Overwrites the value of a leaf, e.g. for a gradient-descent update.
    ///
    /// # Errors
    /// Returns `GradletError::InplaceModification` on non-leaf nodes: their
    /// value is fixed by the operation that produced them.
    pub fn set_value(&self, value: f64) -> Result<(), GradletError> {
        let mut guard = self.borrow_data_mut();
        if guard.op != Op::Leaf {
            return Err(GradletError::InplaceModification {
                operation: "set_value".to_string(),
                reason: format!("cannot overwrite the value of a non-leaf node ({:?})", guard.op),
            });
        }
        if !value.is_finite() {
            log::warn!(
                "set_value: leaf '{}' receives non-finite value {}",
                guard.label,
                value
            );
        }
        guard.value = value;
        Ok(())
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.borrow_data_mut().grad = grad;
    }

    /// Adds `delta` to the accumulated gradient.
    pub fn acc_grad(&self, delta: f64) {
        self.borrow_data_mut().grad += delta;
    }

    /// Replaces the diagnostic label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.borrow_data_mut().label = label.into();
    }
}
