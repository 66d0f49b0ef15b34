use super::*;
use crate::value_data::Op;

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Value::new(4.0);
    let n = neg_op(&a);
    assert_eq!(n.value(), -4.0);
    assert_eq!(n.op(), Op::Mul);
    let operands = n.operands();
    assert!(operands[0].ptr_eq(&a));
    assert_eq!(operands[1].value(), -1.0);
}

#[test]
fn test_neg_backward() {
    let a = Value::new(4.0);
    let n = neg_op(&a);
    n.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_double_negation() {
    let a = Value::new(4.0);
    let n = neg_op(&neg_op(&a));
    n.backward();
    assert_eq!(n.value(), 4.0);
    assert_eq!(a.grad(), 1.0);
}
