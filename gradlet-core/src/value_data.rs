// src/value_data.rs
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// The operation that produced a `Value`.
///
/// The backward pass dispatches on this tag (see `autograd::backward_op`), so
/// each variant carries exactly what its local derivative needs beyond the
/// operands themselves. The three power variants distinguish which side of
/// `base ^ exponent` is a graph node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Directly constructed from a number. No operands.
    Leaf,
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a ^ b` where both sides are nodes.
    Pow,
    /// `a ^ exponent` with a fixed exponent.
    PowConst { exponent: f64 },
    /// `base ^ a` with a fixed base.
    ConstPow { base: f64 },
    /// `e ^ a`
    Exp,
    /// `tanh(a)`
    Tanh,
}

impl Op {
    /// Number of operands a node built by this operation holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::PowConst { .. } | Op::ConstPow { .. } | Op::Exp | Op::Tanh => 1,
            Op::Add | Op::Mul | Op::Pow => 2,
        }
    }

    /// Short symbol used in diagnostic output and graph exports. Empty for leaves.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow | Op::PowConst { .. } | Op::ConstPow { .. } => "^",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::PowConst { exponent } => write!(f, "^{}", exponent),
            Op::ConstPow { base } => write!(f, "{}^", base),
            other => f.write_str(other.symbol()),
        }
    }
}

/// Internal storage for a single scalar node.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by `Value` so that every consumer of a
/// node shares it, while `grad` (and a leaf's `value`) can still be updated
/// through a shared handle.
#[derive(Debug)]
pub struct ValueData {
    /// Forward result, computed once when the node is built.
    pub(crate) value: f64,
    /// Accumulated partial derivative of the last backward root w.r.t. this node.
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Operands in call order. Length always equals `op.arity()`.
    pub(crate) operands: Vec<Value>,
    pub(crate) label: String,
}

impl ValueData {
    pub(crate) fn leaf(value: f64, label: String) -> Self {
        Self::from_op(value, Op::Leaf, Vec::new(), label)
    }

    pub(crate) fn from_op(value: f64, op: Op, operands: Vec<Value>, label: String) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count must match {:?}", op);
        LIVE_VALUES.with(|count| count.set(count.get() + 1));
        ValueData {
            value,
            grad: 0.0,
            op,
            operands,
            label,
        }
    }
}

impl Drop for ValueData {
    fn drop(&mut self) {
        LIVE_VALUES.with(|count| count.set(count.get().saturating_sub(1)));
        // Unlink uniquely owned operands iteratively; the default recursive drop
        // overflows the stack on long chains.
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut data = cell.into_inner();
                pending.append(&mut data.operands);
            }
        }
    }
}

thread_local! {
    static LIVE_VALUES: Cell<usize> = const { Cell::new(0) };
}

/// Number of `ValueData` nodes currently alive on this thread.
///
/// Diagnostic only. Values are `!Send`, so a per-thread count covers every
/// node a graph can reach.
pub fn live_value_count() -> usize {
    LIVE_VALUES.with(Cell::get)
}

/// Resets the live-node counter to zero.
///
/// Intended for test setup: nodes still alive when this is called will not be
/// subtracted below zero when they are dropped later.
pub fn reset_live_value_count() {
    LIVE_VALUES.with(|count| count.set(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_arity_matches_variant() {
        assert_eq!(Op::Leaf.arity(), 0);
        assert_eq!(Op::Exp.arity(), 1);
        assert_eq!(Op::Tanh.arity(), 1);
        assert_eq!(Op::PowConst { exponent: 2.0 }.arity(), 1);
        assert_eq!(Op::ConstPow { base: 2.0 }.arity(), 1);
        assert_eq!(Op::Add.arity(), 2);
        assert_eq!(Op::Mul.arity(), 2);
        assert_eq!(Op::Pow.arity(), 2);
    }

    #[test]
    fn test_op_display() {
        assert_eq!(Op::Leaf.to_string(), "");
        assert_eq!(Op::Add.to_string(), "+");
        assert_eq!(Op::PowConst { exponent: -1.0 }.to_string(), "^-1");
        assert_eq!(Op::ConstPow { base: 2.0 }.to_string(), "2^");
        assert_eq!(Op::Tanh.to_string(), "tanh");
    }

    #[test]
    fn test_live_value_count_tracks_drops() {
        reset_live_value_count();
        {
            let a = Value::new(1.0);
            let b = Value::new(2.0);
            let _c = &a + &b;
            assert_eq!(live_value_count(), 3);
        }
        assert_eq!(live_value_count(), 0);
    }
}
