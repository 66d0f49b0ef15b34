use super::*;
use crate::value_data::Op;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b);
    assert_relative_eq!(c.value(), 1.5, epsilon = 1e-12);
    assert_eq!(c.op(), Op::Mul);
    assert_eq!(c.operands()[1].op(), Op::PowConst { exponent: -1.0 });
}

#[test]
fn test_div_backward() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
    // d(a/b)/db = -a / b^2
    assert_relative_eq!(b.grad(), -6.0 / 16.0, epsilon = 1e-12);
}

#[test]
fn test_div_by_zero_propagates_non_finite() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let c = div_op(&a, &b);
    assert!(c.value().is_infinite());
    c.backward();
    assert!(a.grad().is_infinite());
    assert!(!b.grad().is_finite());
}

#[test]
fn test_zero_over_zero_is_nan() {
    let a = Value::new(0.0);
    let b = Value::new(0.0);
    let c = div_op(&a, &b);
    assert!(c.value().is_nan());
}
