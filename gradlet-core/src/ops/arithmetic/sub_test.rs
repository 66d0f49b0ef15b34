use super::*;
use crate::value_data::Op;

#[test]
fn test_sub_forward_and_shape() {
    let a = Value::new(5.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.value(), 2.0);
    // a + (b * -1)
    assert_eq!(c.op(), Op::Add);
    assert_eq!(c.operands()[1].op(), Op::Mul);
}

#[test]
fn test_sub_backward() {
    let a = Value::new(5.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero_with_cancelling_grads() {
    let a = Value::new(5.0);
    let c = sub_op(&a, &a);
    c.backward();
    assert_eq!(c.value(), 0.0);
    assert_eq!(a.grad(), 0.0);
}
