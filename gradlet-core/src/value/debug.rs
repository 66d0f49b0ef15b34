// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.borrow_data();
        write!(
            f,
            "Value(data={:.6}, grad={:.6}, label={})",
            guard.value, guard.grad, guard.label
        )
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Operands are summarized by count; printing them would walk the whole graph.
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(data={:?}, grad={:?}, op={:?}, operands={}, label={:?})",
                guard.value,
                guard.grad,
                guard.op,
                guard.operands.len(),
                guard.label
            ),
            Err(_) => write!(f, "Value(<mutably borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_display_contains_fields() {
        let v = Value::with_label(1.5, "w0");
        v.set_grad(-0.25);
        let s = v.to_string();
        assert!(s.contains("1.5"), "{}", s);
        assert!(s.contains("-0.25"), "{}", s);
        assert!(s.contains("w0"), "{}", s);
    }

    #[test]
    fn test_debug_summarizes_operands() {
        let a = Value::new(1.0);
        let b = &a * 2.0;
        let s = format!("{:?}", b);
        assert!(s.contains("Mul"), "{}", s);
        assert!(s.contains("operands=2"), "{}", s);
    }
}
