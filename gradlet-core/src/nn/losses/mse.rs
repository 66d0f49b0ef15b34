// gradlet-core/src/nn/losses/mse.rs

use crate::error::GradletError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction applied over the per-sample squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = GradletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(GradletError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared error loss between predictions and targets.
///
/// The loss is built from ordinary graph operations (`sub`, `powf`, `add`),
/// so calling `backward` on it reaches every parameter that contributed to the
/// predictions. `Reduction::Sum` gives `Σ (pred - target)²`; `Reduction::Mean`
/// divides that by the number of pairs.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// # Errors
    /// * `ArityMismatch` if the slices differ in length.
    /// * `EmptyInput` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, GradletError> {
        if predictions.len() != targets.len() {
            return Err(GradletError::ArityMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(GradletError::EmptyInput {
                operation: "MseLoss calculate".to_string(),
            });
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, target)| (pred - target).powf(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => &total / predictions.len() as f64,
        })
    }

    /// Same as [`MseLoss::calculate`] with plain-number targets, which become
    /// constant leaves of the graph.
    pub fn calculate_f64(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, GradletError> {
        let targets: Vec<Value> = targets.iter().map(|&t| Value::new(t)).collect();
        self.calculate(predictions, &targets)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
