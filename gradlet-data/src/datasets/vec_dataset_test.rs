// gradlet-data/src/datasets/vec_dataset_test.rs

use super::*;

#[test]
fn test_vec_dataset_new() {
    let data = vec![1, 2, 3, 4, 5];
    let dataset = VecDataset::new(data.clone());
    assert_eq!(dataset.len(), 5);
}

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0).unwrap(), 10);
    assert_eq!(dataset.get(2).unwrap(), 30);
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(
        dataset.get(3),
        Err(GradletError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    assert_eq!(dataset.len(), 0);
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_item_type() {
    let dataset = VecDataset::new(vec![(vec![1.0, 2.0], -1.0), (vec![0.5, 0.0], 1.0)]);
    let item: (Vec<f64>, f64) = dataset.get(1).unwrap();
    assert_eq!(item, (vec![0.5, 0.0], 1.0));
}
