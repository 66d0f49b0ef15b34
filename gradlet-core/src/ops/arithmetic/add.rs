// gradlet-core/src/ops/arithmetic/add.rs

use crate::ops::apply_binary_op;
use crate::value::Value;
use crate::value_data::Op;

/// `a + b`. Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, Op::Add, |x, y| x + y)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
