//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation on [`Value`]s lives here, grouped by kind:
//!
//! - [`arithmetic`]: `add`, `mul`, `neg`, `sub`, `div`, and the power family.
//! - [`math_elem`]: element functions such as `exp`.
//! - [`activation`]: `tanh`.
//!
//! Each operation has a core `xxx_op` function that computes the forward value
//! eagerly and records the operands and [`Op`] tag on a new node. The matching
//! local derivative lives in [`crate::autograd::backward_op`], which dispatches
//! on that tag. `neg`, `sub` and `div` are composites and have no rule of their
//! own.

use crate::value::Value;
use crate::value_data::{Op, ValueData};

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Builds the output node of a unary operation.
pub(crate) fn apply_unary_op<F>(a: &Value, op: Op, forward: F) -> Value
where
    F: Fn(f64) -> f64,
{
    let out = forward(a.value());
    Value::from_data(ValueData::from_op(out, op, vec![a.clone()], String::new()))
}

/// Builds the output node of a binary operation, keeping operand order.
pub(crate) fn apply_binary_op<F>(a: &Value, b: &Value, op: Op, forward: F) -> Value
where
    F: Fn(f64, f64) -> f64,
{
    let out = forward(a.value(), b.value());
    Value::from_data(ValueData::from_op(
        out,
        op,
        vec![a.clone(), b.clone()],
        String::new(),
    ))
}
