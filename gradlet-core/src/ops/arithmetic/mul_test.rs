use super::*;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.value(), -6.0);
    assert_eq!(c.op(), Op::Mul);
}

#[test]
fn test_mul_backward_swaps_values() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), b.value());
    assert_eq!(b.grad(), a.value());
}

#[test]
fn test_mul_with_zero_operand() {
    let a = Value::new(0.0);
    let b = Value::new(7.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_eq!(c.value(), 0.0);
    assert_eq!(a.grad(), 7.0);
    assert_eq!(b.grad(), 0.0);
}
