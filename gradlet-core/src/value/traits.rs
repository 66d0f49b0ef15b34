// src/value/traits.rs

use crate::value::{constant, Value};
use num_traits::{One, Pow, Zero};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Clones the handle. This is a shallow clone that increases the reference
    /// count of the shared node; gradients seen through one clone are seen
    /// through all of them.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

/// Values compare by identity, not by numeric value: two leaves holding `1.0`
/// are different nodes with independent gradients.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Zero for Value {
    fn zero() -> Self {
        constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        constant(1.0)
    }
}

impl Sum<Value> for Value {
    /// Left fold with `+`. An empty iterator yields a fresh `0.0` leaf.
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| &acc + &v),
            None => Value::zero(),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Pow<f64> for &Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        self.powf(exponent)
    }
}

impl Pow<f64> for Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        self.powf(exponent)
    }
}

impl Pow<&Value> for &Value {
    type Output = Value;
    fn pow(self, exponent: &Value) -> Value {
        Value::pow(self, exponent)
    }
}

impl Pow<&Value> for f64 {
    type Output = Value;
    fn pow(self, exponent: &Value) -> Value {
        exponent.rpow(self)
    }
}
