// gradlet-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::mul_op;
use crate::value::{constant, Value};

/// `-a`, built as `a * (-1)` so it reuses the multiplication rule.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &constant(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
