use gradlet_core::nn::Neuron;
use gradlet_core::{labeled_leaves, Value};

// Helpers shared by several integration test crates; not every crate uses all of them.
#[allow(dead_code)]
pub(crate) fn hand_worked_neuron() -> (Neuron, Vec<Value>) {
    let neuron = Neuron::from_values(&[-3.0, 1.0], 6.881_373_587_019_543);
    let inputs = labeled_leaves("x", &[2.0, 0.0]);
    (neuron, inputs)
}

/// The four-sample regression set: three features, target in {-1, 1}.
#[allow(dead_code)]
pub(crate) fn tiny_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, -3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
