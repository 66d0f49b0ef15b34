use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

/// `e ^ a`. Backward: `a.grad += e^a * g`.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, Op::Exp, f64::exp)
}

impl Value {
    /// Natural exponential of this value.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
