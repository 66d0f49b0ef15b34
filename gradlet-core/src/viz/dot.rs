use std::collections::HashMap;
use std::io::{self, Write};

use crate::autograd::trace;
use crate::model::Mlp;
use crate::value::{NodeId, Value};

/// Layout settings shared by the DOT writers.
#[derive(Debug, Clone, PartialEq)]
pub struct DotOptions {
    /// Graphviz `rankdir` (`"LR"`, `"TB"`, ...).
    pub rankdir: String,
    /// Decimals printed for `data` and `grad`.
    pub precision: usize,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
            precision: 4,
        }
    }
}

/// Escapes characters that are structural inside a record label.
fn escape_record(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Collects the output of a DOT writer into a `String`.
fn render_to_string(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = write(&mut buffer) {
        log::warn!("dot export failed: {}", err);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Renders the graph reachable from `root` as a DOT document.
///
/// See [`write_value_graph`] for the layout.
pub fn value_graph_to_dot(root: &Value, options: &DotOptions) -> String {
    render_to_string(|buffer| write_value_graph(root, buffer, options))
}

/// Writes the graph reachable from `root` to `writer` as a DOT document.
///
/// Every value becomes a record node `{ label | data x | grad y }` named
/// `n{i}`, where `i` is its position in topological order. A non-leaf value
/// also gets an ellipse `n{i}_op` holding its operation symbol, wired into
/// it, and its predecessors point at that op node.
pub fn write_value_graph(
    root: &Value,
    writer: &mut impl Write,
    options: &DotOptions,
) -> io::Result<()> {
    let (nodes, edges) = trace(root);
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect();
    let precision = options.precision;

    writeln!(writer, "digraph G {{")?;
    writeln!(writer, "  rankdir=\"{}\";", escape_quoted(&options.rankdir))?;
    writeln!(writer, "  node [shape=record];")?;

    for (i, node) in nodes.iter().enumerate() {
        let label = node.label();
        let fields = format!(
            "data {:.p$} | grad {:.p$}",
            node.value(),
            node.grad(),
            p = precision
        );
        let record = if label.is_empty() {
            format!("{{ {} }}", fields)
        } else {
            format!("{{ {} | {} }}", escape_record(&label), fields)
        };
        writeln!(writer, "  n{} [label=\"{}\"];", i, record)?;

        if !node.is_leaf() {
            writeln!(
                writer,
                "  n{}_op [label=\"{}\", shape=ellipse];",
                i,
                escape_quoted(&node.op().to_string())
            )?;
            writeln!(writer, "  n{}_op -> n{};", i, i)?;
        }
    }

    for (pred, consumer) in &edges {
        if let (Some(p), Some(c)) = (index.get(&pred.id()), index.get(&consumer.id())) {
            writeln!(writer, "  n{} -> n{}_op;", p, c)?;
        }
    }

    writeln!(writer, "}}")?;
    log::trace!(
        "write_value_graph: {} nodes, {} edges",
        nodes.len(),
        edges.len()
    );
    Ok(())
}

/// Renders the architecture of `mlp` as a DOT document.
pub fn mlp_to_dot(mlp: &Mlp, options: &DotOptions) -> String {
    render_to_string(|buffer| write_mlp_graph(mlp, buffer, options))
}

/// Writes the architecture of `mlp` to `writer`: an input cluster, one
/// cluster per layer, and an edge from every unit of a stage to every unit
/// of the next.
pub fn write_mlp_graph(
    mlp: &Mlp,
    writer: &mut impl Write,
    options: &DotOptions,
) -> io::Result<()> {
    writeln!(writer, "digraph mlp {{")?;
    writeln!(writer, "  rankdir=\"{}\";", escape_quoted(&options.rankdir))?;
    writeln!(writer, "  node [shape=circle];")?;

    writeln!(writer, "  subgraph cluster_input {{")?;
    writeln!(writer, "    label=\"input\";")?;
    for j in 0..mlp.n_inputs() {
        writeln!(writer, "    s0_{} [label=\"x{}\"];", j, j)?;
    }
    writeln!(writer, "  }}")?;

    for (i, layer) in mlp.layers().iter().enumerate() {
        let stage = i + 1;
        writeln!(writer, "  subgraph cluster_{} {{", stage)?;
        writeln!(
            writer,
            "    label=\"{} ({} -> {})\";",
            escape_quoted(layer.name()),
            layer.n_inputs(),
            layer.n_outputs()
        )?;
        for j in 0..layer.n_outputs() {
            writeln!(writer, "    s{}_{} [label=\"n{}\"];", stage, j, j)?;
        }
        writeln!(writer, "  }}")?;
    }

    for (stage, pair) in mlp.sizes().windows(2).enumerate() {
        for from in 0..pair[0] {
            for to in 0..pair[1] {
                writeln!(writer, "  s{}_{} -> s{}_{};", stage, from, stage + 1, to)?;
            }
        }
    }

    writeln!(writer, "}}")
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
