use gradlet_core::model::Mlp;
use gradlet_core::nn::{Module, MseLoss, Reduction};
use gradlet_core::optim::{Optimizer, SgdOptimizer};
use gradlet_core::{leaves, GradletError, Value};
use gradlet_data::{DataLoader, RandomSampler, SequentialSampler, SupervisedDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dataset() -> SupervisedDataset {
    SupervisedDataset::new(
        vec![
            vec![2.0, -3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )
    .unwrap()
}

fn batch_loss(mlp: &Mlp, batch: &[(Vec<f64>, f64)]) -> Result<Value, GradletError> {
    let mut preds = Vec::with_capacity(batch.len());
    let mut targets = Vec::with_capacity(batch.len());
    for (x, y) in batch {
        preds.push(mlp.call(&leaves(x))?.remove(0));
        targets.push(*y);
    }
    MseLoss::new(Reduction::Sum).calculate_f64(&preds, &targets)
}

fn epoch_loss(mlp: &Mlp) -> Result<f64, GradletError> {
    let loader = DataLoader::try_new(dataset(), 4, SequentialSampler::new(), false, None)?;
    let mut total = 0.0;
    for batch in loader {
        total += batch_loss(mlp, &batch?)?.value();
    }
    Ok(total)
}

#[test]
fn test_full_batch_training_reduces_loss() -> Result<(), GradletError> {
    let mlp = Mlp::with_rng(&[3, 4, 1], &mut StdRng::seed_from_u64(42))?;
    let mut optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), 0.05);
    let mut loader = DataLoader::try_new(dataset(), 4, SequentialSampler::new(), false, None)?;

    let initial = epoch_loss(&mlp)?;
    for _ in 0..60 {
        loader.reset();
        for batch in loader.by_ref() {
            let loss = batch_loss(&mlp, &batch?)?;
            optimizer.zero_grad();
            loss.backward();
            optimizer.step()?;
        }
    }
    let last = epoch_loss(&mlp)?;
    assert!(last < initial, "loss went from {} to {}", initial, last);
    Ok(())
}

#[test]
fn test_minibatch_training_with_random_sampler() -> Result<(), GradletError> {
    let mlp = Mlp::with_rng(&[3, 4, 1], &mut StdRng::seed_from_u64(7))?;
    let mut optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), 0.02)
        .with_momentum(0.5);
    let sampler = RandomSampler::new(false, None).with_seed(11);
    let mut loader = DataLoader::try_new(dataset(), 2, sampler, false, None)?;
    assert_eq!(loader.num_batches(), 2);

    let initial = epoch_loss(&mlp)?;
    for _ in 0..80 {
        loader.reset();
        let mut batches = 0;
        for batch in loader.by_ref() {
            let loss = batch_loss(&mlp, &batch?)?;
            optimizer.zero_grad();
            loss.backward();
            optimizer.step()?;
            batches += 1;
        }
        assert_eq!(batches, 2);
    }
    let last = epoch_loss(&mlp)?;
    assert!(last < initial, "loss went from {} to {}", initial, last);
    Ok(())
}
