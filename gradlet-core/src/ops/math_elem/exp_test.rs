use super::*;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let a = Value::new(1.0);
    let e = exp_op(&a);
    assert_relative_eq!(e.value(), std::f64::consts::E, epsilon = 1e-12);
    assert_eq!(e.op(), Op::Exp);
}

#[test]
fn test_exp_backward_equals_forward() {
    let a = Value::new(0.7);
    let e = a.exp();
    e.backward();
    assert_relative_eq!(a.grad(), 0.7f64.exp(), epsilon = 1e-12);
}

#[test]
fn test_exp_overflow_is_infinite() {
    let a = Value::new(1000.0);
    let e = a.exp();
    assert!(e.value().is_infinite());
}
