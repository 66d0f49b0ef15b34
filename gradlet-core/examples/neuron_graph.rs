//! Builds the hand-worked two-input neuron, runs backward and exports the graph.
//!
//! Run with `cargo run -p gradlet-core --example neuron_graph`. Writes
//! `neuron_graph.dot` and, when Graphviz is installed, `neuron_graph.svg`.

use gradlet_core::viz::{render_svg, value_graph_to_dot, DotOptions};
use gradlet_core::{GradletError, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");

    let x1w1 = &x1 * &w1;
    x1w1.set_label("x1*w1");
    let x2w2 = &x2 * &w2;
    x2w2.set_label("x2*w2");
    let n = &(&x1w1 + &x2w2) + &b;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward();

    println!("{}", o);
    for v in [&x1, &w1, &x2, &w2, &b] {
        println!("  {}", v);
    }

    let dot = value_graph_to_dot(&o, &DotOptions::default());
    std::fs::write("neuron_graph.dot", &dot)?;
    println!("Wrote neuron_graph.dot");

    match render_svg(&dot, "neuron_graph.svg") {
        Ok(()) => println!("Wrote neuron_graph.svg"),
        Err(GradletError::Render(reason)) => println!("Skipping SVG: {}", reason),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
