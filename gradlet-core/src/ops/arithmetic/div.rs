// gradlet-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul::mul_op, pow::pow_const_op};
use crate::value::Value;

/// `a / b`, built as `a * b^-1`.
///
/// A zero-valued divisor is not an error: the forward value and the gradients
/// become infinite or NaN exactly as plain `f64` arithmetic would.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_const_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
