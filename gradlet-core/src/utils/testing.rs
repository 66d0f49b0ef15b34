use crate::value::Value;

/// Checks that `actual[i].value()` is within `tolerance` of `expected[i]`.
/// Panics on a length mismatch or the first element that differs too much.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    check_near("value", actual.iter().map(Value::value), expected, tolerance);
}

/// Same as [`check_values_near`] for the accumulated gradients.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    check_near("grad", actual.iter().map(Value::grad), expected, tolerance);
}

fn check_near(what: &str, actual: impl ExactSizeIterator<Item = f64>, expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "{} length mismatch", what);
    for (i, (a, e)) in actual.zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::leaves;

    #[test]
    fn test_check_values_near_passes() {
        let xs = leaves(&[1.0, 2.0]);
        check_values_near(&xs, &[1.0, 2.0 + 1e-10], 1e-9);
        check_grads_near(&xs, &[0.0, 0.0], 0.0);
    }

    #[test]
    #[should_panic(expected = "value mismatch at index 1")]
    fn test_check_values_near_panics() {
        let xs = leaves(&[1.0, 2.0]);
        check_values_near(&xs, &[1.0, 2.5], 1e-3);
    }

    #[test]
    #[should_panic(expected = "grad mismatch at index 0")]
    fn test_nan_never_near() {
        let x = leaves(&[1.0]);
        x[0].set_grad(f64::NAN);
        check_grads_near(&x, &[0.0], 1.0);
    }
}
