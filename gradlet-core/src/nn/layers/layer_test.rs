use super::*;
use crate::value::leaves;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_shapes_and_parameter_count() {
    let layer = Layer::with_rng(3, 4, &mut StdRng::seed_from_u64(5));
    assert_eq!(layer.name(), "dense");
    assert_eq!(layer.n_inputs(), 3);
    assert_eq!(layer.n_outputs(), 4);
    assert_eq!(layer.num_parameters(), 4 * (3 + 1));
    assert_eq!(layer.children().len(), 4);

    let out = layer.call(&leaves(&[0.1, -0.2, 0.3])).unwrap();
    assert_eq!(out.len(), 4);
    for o in &out {
        assert!(o.value().abs() < 1.0);
    }
}

#[test]
fn test_layer_outputs_match_neurons() {
    let n0 = Neuron::from_values(&[1.0, 2.0], 0.0);
    let n1 = Neuron::from_values(&[-1.0, 0.5], 0.25);
    let layer = Layer::from_neurons(vec![n0, n1]).unwrap();
    let out = layer.call(&leaves(&[0.5, -0.5])).unwrap();
    assert_relative_eq!(out[0].value(), (-0.5f64).tanh(), epsilon = 1e-12);
    assert_relative_eq!(out[1].value(), (-0.5f64).tanh(), epsilon = 1e-12);
}

#[test]
fn test_layer_named_parameters() {
    let mut layer = Layer::from_neurons(vec![
        Neuron::from_values(&[1.0], 0.0),
        Neuron::from_values(&[2.0], 0.0),
    ])
    .unwrap();
    layer.set_name("hidden");
    assert_eq!(layer.name(), "hidden");
    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["neuron0.w0", "neuron0.b", "neuron1.w0", "neuron1.b"]);
}

#[test]
fn test_layer_from_neurons_validation() {
    assert!(matches!(
        Layer::from_neurons(vec![]),
        Err(GradletError::InvalidArchitecture(_))
    ));
    let mixed = vec![Neuron::from_values(&[1.0], 0.0), Neuron::from_values(&[1.0, 1.0], 0.0)];
    assert!(matches!(
        Layer::from_neurons(mixed),
        Err(GradletError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_layer_arity_mismatch() {
    let layer = Layer::new(2, 3);
    let err = layer.forward(&leaves(&[1.0])).unwrap_err();
    assert_eq!(
        err,
        GradletError::ArityMismatch {
            expected: 2,
            actual: 1,
            operation: "Layer(dense)::call".to_string(),
        }
    );
}

#[test]
fn test_layer_zero_grad() {
    let layer = Layer::new(2, 2);
    let out = layer.call(&leaves(&[1.0, 1.0])).unwrap();
    let total: Value = out.iter().sum();
    total.backward();
    assert!(layer.parameters().iter().any(|p| p.grad() != 0.0));
    layer.zero_grad();
    assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
}
