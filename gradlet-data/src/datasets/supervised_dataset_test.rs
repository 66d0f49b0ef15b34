use super::*;

fn sample() -> SupervisedDataset {
    SupervisedDataset::new(
        vec![vec![2.0, 3.0, -1.0], vec![3.0, -1.0, 0.5]],
        vec![1.0, -1.0],
    )
    .unwrap()
}

#[test]
fn test_supervised_dataset_get() {
    let ds = sample();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.n_features(), 3);
    assert_eq!(ds.get(1).unwrap(), (vec![3.0, -1.0, 0.5], -1.0));
    assert_eq!(ds.inputs().len(), ds.targets().len());
}

#[test]
fn test_supervised_dataset_out_of_bounds() {
    assert_eq!(
        sample().get(2),
        Err(GradletError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
fn test_supervised_dataset_length_mismatch() {
    let err = SupervisedDataset::new(vec![vec![1.0]], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        GradletError::ArityMismatch {
            expected: 1,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_supervised_dataset_ragged_rows() {
    let err = SupervisedDataset::new(vec![vec![1.0, 2.0], vec![1.0]], vec![0.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        GradletError::ArityMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn test_supervised_dataset_empty() {
    let ds = SupervisedDataset::new(Vec::new(), Vec::new()).unwrap();
    assert!(ds.is_empty());
    assert_eq!(ds.n_features(), 0);
}
