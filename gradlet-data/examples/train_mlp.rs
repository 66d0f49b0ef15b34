//! Trains a 3-4-1 MLP on four samples with plain SGD, then exports graphs.
//!
//! Run with `cargo run -p gradlet-data --example train_mlp`. Writes
//! `loss_graph.dot` and `mlp.dot` (plus SVGs when Graphviz is installed).

use gradlet_core::model::Mlp;
use gradlet_core::nn::{Module, MseLoss, Reduction};
use gradlet_core::optim::{Optimizer, SgdOptimizer};
use gradlet_core::viz::{mlp_to_dot, render_svg, value_graph_to_dot, DotOptions};
use gradlet_core::{labeled_leaves, GradletError, Value};
use gradlet_data::{DataLoader, Dataset, SequentialSampler, SupervisedDataset};

const LEARNING_RATE: f64 = 0.01;
const THRESHOLD: f64 = 1e-6;
const MAX_ITERATIONS: usize = 20_000;

fn export(name: &str, dot: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dot_path = format!("{}.dot", name);
    std::fs::write(&dot_path, dot)?;
    println!("Wrote {}", dot_path);
    match render_svg(dot, format!("{}.svg", name)) {
        Ok(()) => println!("Wrote {}.svg", name),
        Err(GradletError::Render(reason)) => println!("Skipping {}.svg: {}", name, reason),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = SupervisedDataset::new(
        vec![
            vec![2.0, -3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )?;
    let n_samples = dataset.len();
    let mut loader = DataLoader::try_new(dataset.clone(), n_samples, SequentialSampler::new(), false, None)?;

    let mlp = Mlp::new(&[3, 4, 1])?;
    println!("{} parameters", mlp.num_parameters());
    let mut optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), LEARNING_RATE);
    let mse = MseLoss::new(Reduction::Sum);

    let mut last_loss: Option<Value> = None;
    for itr in 1..=MAX_ITERATIONS {
        loader.reset();
        let mut loss_value = 0.0;
        let mut loss_node = None;
        for batch in loader.by_ref() {
            let batch = batch?;
            let mut preds = Vec::with_capacity(batch.len());
            let mut targets = Vec::with_capacity(batch.len());
            for (i, (x, y)) in batch.iter().enumerate() {
                preds.push(mlp.call(&labeled_leaves(&format!("x{}_", i), x))?.remove(0));
                targets.push(Value::with_label(*y, format!("y_gt{}", i)));
            }
            let loss = mse.calculate(&preds, &targets)?;
            loss_value += loss.value();
            loss_node = Some(loss);
        }
        let loss = match loss_node {
            Some(loss) => loss,
            None => break,
        };

        if itr % 100 == 1 {
            println!("[Iteration {}]: Loss = {:.8}", itr, loss_value);
        }
        if loss_value < THRESHOLD {
            println!("[Iteration {}]: Loss = {:.8} (below threshold)", itr, loss_value);
            loss.set_label("loss");
            last_loss = Some(loss);
            break;
        }

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;
        last_loss = Some(loss);
    }

    for i in 0..n_samples {
        let (x, y) = dataset.get(i)?;
        let pred = mlp.call(&labeled_leaves("x", &x))?.remove(0);
        println!("________________________________________");
        println!("Ground truth: {}", y);
        println!("Predicted val: {:.6}", pred.value());
    }
    println!("________________________________________");

    let options = DotOptions::default();
    if let Some(loss) = &last_loss {
        export("loss_graph", &value_graph_to_dot(loss, &options))?;
    }
    export("mlp", &mlp_to_dot(&mlp, &options))?;
    Ok(())
}
