use crate::error::GradletError;
use crate::value::{leaves, Value};
use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h): {value_plus:?}, f(x-h): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradletError),
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<GradletError> for GradCheckError {
    fn from(err: GradletError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated once on fresh leaves built from `inputs` and
/// differentiated with [`Value::backward`]; then, for every input `i`, it is
/// re-evaluated at `inputs[i] ± epsilon` on new leaves. A gradient passes when
/// it is within `tolerance` of the numerical estimate, either absolutely or
/// relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradletError>,
{
    if !(epsilon > 0.0) || !(tolerance > 0.0) {
        return Err(GradCheckError::InvalidConfiguration(format!(
            "epsilon ({}) and tolerance ({}) must be positive",
            epsilon, tolerance
        )));
    }

    let xs = leaves(inputs);
    let output = func(&xs)?;
    output.backward();
    let analytical: Vec<f64> = xs.iter().map(Value::grad).collect();

    let evaluate = |i: usize, delta: f64| -> Result<f64, GradCheckError> {
        let mut shifted = inputs.to_vec();
        shifted[i] += delta;
        Ok(func(&leaves(&shifted))?.value())
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let value_plus = evaluate(i, epsilon)?;
        let value_minus = evaluate(i, -epsilon)?;
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance);
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "check_grad: input {} ok (analytical {}, numerical {})",
            i,
            analytical_grad,
            numerical_grad
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
