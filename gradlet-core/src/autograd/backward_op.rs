//! Local derivative rules, one per [`Op`] tag.
//!
//! Instead of storing a closure on every node, the backward pass calls
//! [`propagate`] which dispatches on the node's operation. The rule reads the
//! node's accumulated gradient `g` and *adds* the chain-rule contribution into
//! each operand's gradient.

use crate::value::Value;
use crate::value_data::Op;

/// Pushes the gradient of `node` into its operands.
///
/// A no-op for leaves. Repeated operands (`a * a`) receive one contribution
/// per occurrence.
pub fn propagate(node: &Value) {
    let contributions = local_contributions(node);
    for (operand, delta) in contributions {
        operand.acc_grad(delta);
    }
}

/// Computes `(operand, delta)` pairs for `node` without mutating anything.
///
/// All reads happen here so no `RefCell` borrow of `node` or of an operand is
/// held while gradients are written back.
pub(crate) fn local_contributions(node: &Value) -> Vec<(Value, f64)> {
    let data = node.borrow_data();
    let g = data.grad;
    let out = data.value;
    let ops = &data.operands;

    match data.op {
        Op::Leaf => Vec::new(),
        Op::Add => vec![(ops[0].clone(), g), (ops[1].clone(), g)],
        Op::Mul => {
            let (a, b) = (ops[0].value(), ops[1].value());
            vec![(ops[0].clone(), b * g), (ops[1].clone(), a * g)]
        }
        Op::Pow => {
            let (base, exponent) = (ops[0].value(), ops[1].value());
            vec![
                (ops[0].clone(), exponent * base.powf(exponent - 1.0) * g),
                (ops[1].clone(), out * base.ln() * g),
            ]
        }
        Op::PowConst { exponent } => {
            let base = ops[0].value();
            vec![(ops[0].clone(), exponent * base.powf(exponent - 1.0) * g)]
        }
        Op::ConstPow { base } => vec![(ops[0].clone(), out * base.ln() * g)],
        Op::Exp => vec![(ops[0].clone(), out * g)],
        Op::Tanh => vec![(ops[0].clone(), (1.0 - out * out) * g)],
    }
}
