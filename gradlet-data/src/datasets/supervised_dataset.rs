use super::traits::Dataset;
use gradlet_core::GradletError;

/// Feature rows paired with scalar targets.
///
/// Every row has the same number of features, which is what an `Mlp` input
/// layer expects. Items are `(features, target)`.
#[derive(Debug, Clone)]
pub struct SupervisedDataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<f64>,
    n_features: usize,
}

impl SupervisedDataset {
    /// # Errors
    /// `ArityMismatch` if `inputs` and `targets` differ in length or a row has
    /// a different width than the first one.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self, GradletError> {
        if inputs.len() != targets.len() {
            return Err(GradletError::ArityMismatch {
                expected: inputs.len(),
                actual: targets.len(),
                operation: "SupervisedDataset::new (targets)".to_string(),
            });
        }
        let n_features = inputs.first().map_or(0, Vec::len);
        if let Some(row) = inputs.iter().find(|row| row.len() != n_features) {
            return Err(GradletError::ArityMismatch {
                expected: n_features,
                actual: row.len(),
                operation: "SupervisedDataset::new (feature row)".to_string(),
            });
        }
        Ok(SupervisedDataset {
            inputs,
            targets,
            n_features,
        })
    }

    /// Width of every feature row (0 for an empty dataset).
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

impl Dataset for SupervisedDataset {
    type Item = (Vec<f64>, f64);

    fn get(&self, index: usize) -> Result<Self::Item, GradletError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(x), Some(&y)) => Ok((x.clone(), y)),
            _ => Err(GradletError::IndexOutOfBounds {
                index,
                len: self.targets.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
#[path = "supervised_dataset_test.rs"]
mod tests;
