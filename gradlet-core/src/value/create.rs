// src/value/create.rs

use crate::value::Value;
use crate::value_data::ValueData;

impl Value {
    /// Creates a new leaf value with an empty label.
    ///
    /// Leaves have no operands and start with a gradient of zero.
    pub fn new(value: f64) -> Value {
        Value::from_data(ValueData::leaf(value, String::new()))
    }

    /// Creates a new leaf value carrying a diagnostic label.
    pub fn with_label(value: f64, label: impl Into<String>) -> Value {
        Value::from_data(ValueData::leaf(value, label.into()))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

/// Materializes a plain number as a leaf so it can take part in a graph.
///
/// Mixed node/number operators (`&x + 3.0`, `2.0 * &x`) go through here; the
/// leaf receives a gradient like any other node, callers just never read it.
pub fn constant(value: f64) -> Value {
    Value::new(value)
}

/// Builds one unlabeled leaf per number, in order.
pub fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::new).collect()
}

/// Builds leaves labeled `{prefix}{index}`, e.g. `x0, x1, ...`.
pub fn labeled_leaves(prefix: &str, values: &[f64]) -> Vec<Value> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Value::with_label(v, format!("{}{}", prefix, i)))
        .collect()
}
