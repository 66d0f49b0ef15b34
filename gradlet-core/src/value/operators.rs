// src/value/operators.rs
//
// std::ops overloads for every mix of `Value`, `&Value` and `f64`. Plain numbers
// are materialized as leaves first, and operand order is kept as written so
// `2.0 - &x` and `&x - 2.0` build mirror-image graphs.

use crate::ops::arithmetic::{add::add_op, div::div_op, mul::mul_op, neg::neg_op, sub::sub_op};
use crate::value::{constant, Value};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &constant(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &constant(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&constant(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&constant(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

// `x += y` rebinds `x` to a new node; the old node stays in the graph as an operand.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for Value {
            fn $method(&mut self, rhs: &Value) {
                *self = $op_fn(self, rhs);
            }
        }

        impl $trait<Value> for Value {
            fn $method(&mut self, rhs: Value) {
                *self = $op_fn(self, &rhs);
            }
        }

        impl $trait<f64> for Value {
            fn $method(&mut self, rhs: f64) {
                *self = $op_fn(self, &constant(rhs));
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}
