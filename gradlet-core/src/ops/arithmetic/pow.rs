// gradlet-core/src/ops/arithmetic/pow.rs

use crate::ops::{apply_binary_op, apply_unary_op};
use crate::value::Value;
use crate::value_data::Op;

/// `base ^ exponent` with a fixed exponent.
///
/// Backward: `base.grad += exponent * base^(exponent - 1) * g`.
pub fn pow_const_op(base: &Value, exponent: f64) -> Value {
    apply_unary_op(base, Op::PowConst { exponent }, |x| x.powf(exponent))
}

/// `base ^ exponent` with a fixed base.
///
/// Backward: `exponent.grad += base^exponent * ln(base) * g`. A non-positive
/// base yields NaN gradients rather than an error.
pub fn const_pow_op(base: f64, exponent: &Value) -> Value {
    apply_unary_op(exponent, Op::ConstPow { base }, |x| base.powf(x))
}

/// `base ^ exponent` where both sides are nodes.
///
/// Backward: `base.grad += exponent * base^(exponent - 1) * g` and
/// `exponent.grad += base^exponent * ln(base) * g`.
pub fn pow_op(base: &Value, exponent: &Value) -> Value {
    apply_binary_op(base, exponent, Op::Pow, f64::powf)
}

impl Value {
    /// Raises this value to a fixed power.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_const_op(self, exponent)
    }

    /// Raises this value to the power of another node.
    pub fn pow(&self, exponent: &Value) -> Value {
        pow_op(self, exponent)
    }

    /// Raises a fixed `base` to the power of this value.
    pub fn rpow(&self, base: f64) -> Value {
        const_pow_op(base, self)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
