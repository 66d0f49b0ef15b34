use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Orders every node reachable from `root` so that operands come before the
/// nodes that consume them. `root` is always last.
///
/// This is a post-order depth-first traversal seeded with a visited set keyed
/// by node identity, so shared nodes appear exactly once. It uses an explicit
/// stack, which keeps long chains (e.g. a loss summed over many samples) from
/// exhausting the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Value> = Vec::new();
    // (node, operands already expanded?)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is finished first, matching recursive order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("topological_sort: {} nodes reachable from root", sorted.len());
    sorted
}

/// Enumerates the nodes reachable from `root` and the edges between them.
///
/// Each edge is `(predecessor, consumer)`. Nodes are listed in topological
/// order and edges are de-duplicated, so `a * a` contributes a single edge.
/// Nothing in the graph is modified.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let nodes = topological_sort(root);
    let mut edges = Vec::new();
    for node in &nodes {
        for pred in node.predecessors() {
            edges.push((pred, node.clone()));
        }
    }
    (nodes, edges)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
