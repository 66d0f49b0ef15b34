use super::*;
use crate::nn::layers::Neuron;
use crate::value::leaves;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_parameter_count() {
    let sizes = [3, 4, 4, 1];
    let mlp = Mlp::new(&sizes).unwrap();
    let expected: usize = sizes.windows(2).map(|p| (p[0] + 1) * p[1]).sum();
    assert_eq!(mlp.num_parameters(), expected);
    assert_eq!(expected, 41);
    assert_eq!(mlp.sizes(), sizes.to_vec());
    assert_eq!(mlp.layers().len(), 3);
}

#[test]
fn test_mlp_layer_names() {
    let mlp = Mlp::new(&[2, 3, 1]).unwrap();
    let names: Vec<&str> = mlp.layers().iter().map(Layer::name).collect();
    assert_eq!(names, vec!["dense1", "dense2"]);
    let named = mlp.named_parameters();
    assert_eq!(named[0].0, "dense1.neuron0.w0");
    assert_eq!(named.last().map(|(n, _)| n.as_str()), Some("dense2.neuron0.b"));
}

#[test]
fn test_mlp_invalid_architecture() {
    assert!(matches!(Mlp::new(&[3]), Err(GradletError::InvalidArchitecture(_))));
    assert!(matches!(Mlp::new(&[]), Err(GradletError::InvalidArchitecture(_))));
    assert!(matches!(Mlp::new(&[3, 0, 1]), Err(GradletError::InvalidArchitecture(_))));

    let l1 = Layer::new(2, 3);
    let l2 = Layer::new(4, 1);
    assert!(matches!(
        Mlp::from_layers(vec![l1, l2]),
        Err(GradletError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_mlp_forward_and_arity() {
    let mlp = Mlp::with_rng(&[3, 4, 1], &mut StdRng::seed_from_u64(9)).unwrap();
    let out = mlp.call(&leaves(&[2.0, 3.0, -1.0])).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].value().abs() < 1.0);

    match mlp.forward(&leaves(&[2.0, 3.0])) {
        Err(GradletError::ArityMismatch { expected: 3, actual: 2, .. }) => {}
        other => panic!("Expected ArityMismatch, got {:?}", other),
    }
}

#[test]
fn test_mlp_backward_reaches_all_parameters() {
    let mlp = Mlp::with_rng(&[2, 3, 1], &mut StdRng::seed_from_u64(1)).unwrap();
    let out = mlp.call(&leaves(&[0.5, -0.5])).unwrap();
    out[0].backward();
    // With random weights in (-1, 1) no gradient is exactly zero.
    assert!(mlp.parameters().iter().all(|p| p.grad() != 0.0));
    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_mlp_from_layers_keeps_custom_names() {
    let mut hidden = Layer::from_neurons(vec![Neuron::from_values(&[1.0], 0.0)]).unwrap();
    hidden.set_name("hidden");
    let out = Layer::from_neurons(vec![Neuron::from_values(&[1.0], 0.0)]).unwrap();
    let mlp = Mlp::from_layers(vec![hidden, out]).unwrap();
    assert_eq!(mlp.layers()[0].name(), "hidden");
    assert_eq!(mlp.layers()[1].name(), "dense2");
    assert_eq!(mlp.children().len(), 2);
}
