// gradlet-core/src/ops/arithmetic/mul.rs

use crate::ops::apply_binary_op;
use crate::value::Value;
use crate::value_data::Op;

/// `a * b`. Backward: `a.grad += b * g`, `b.grad += a * g`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, Op::Mul, |x, y| x * y)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
