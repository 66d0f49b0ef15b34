use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

/// Hyperbolic tangent, `(e^2a - 1) / (e^2a + 1)`.
///
/// Backward: `a.grad += (1 - tanh(a)^2) * g`, using the cached output.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(a, Op::Tanh, f64::tanh)
}

impl Value {
    /// Hyperbolic tangent of this value.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
