// src/value/mod.rs

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod debug;
mod operators;
mod traits;

pub use create::{constant, labeled_leaves, leaves};

/// Stable identity of a node for the lifetime of the graph that owns it.
///
/// It is the address of the shared `ValueData`; two handles compare equal
/// under `NodeId` exactly when they point at the same node.
pub type NodeId = *const RefCell<ValueData>;

/// A differentiable scalar: one node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** every node that consumes this value as an operand
///     holds a clone of the handle, so the graph is a DAG of shared nodes and is
///     reclaimed once the last handle (usually the root) is dropped.
/// 2.  **Interior Mutability:** `grad` (and a leaf's `value`) can be updated
///     through any handle during the backward pass or an optimizer step.
///
/// Cloning a `Value` is shallow: it creates another handle to the same node.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    pub(crate) fn from_data(data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Immutable borrow of the underlying node data.
    pub(crate) fn borrow_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Mutable borrow of the underlying node data.
    pub(crate) fn borrow_data_mut(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Identity of this node (see [`NodeId`]).
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod create_tests;

#[cfg(test)]
#[path = "accessors_test.rs"]
mod accessors_tests;

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod autograd_methods_tests;

#[cfg(test)]
#[path = "operators_test.rs"]
mod operators_tests;
