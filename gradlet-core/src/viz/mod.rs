//! Graphviz export of expression graphs and network architectures.
//!
//! Everything here only reads the graph: no node is created, and no `value`
//! or `grad` is changed.

pub mod dot;
pub mod render;

pub use dot::{mlp_to_dot, value_graph_to_dot, write_mlp_graph, write_value_graph, DotOptions};
pub use render::{render_svg, render_svg_with};
