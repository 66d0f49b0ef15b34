//! Scalar reverse-mode automatic differentiation.
//!
//! Every [`Value`] is one node of an eagerly built computation graph. Arithmetic
//! on values records the operation and its operands; [`Value::backward`] then
//! walks the graph in reverse topological order and accumulates the gradient
//! of the root into every node it reaches.
//!
//! On top of the engine sit small network building blocks ([`nn`], [`model`]),
//! optimizers ([`optim`]) and a Graphviz exporter ([`viz`]).

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod model;
pub mod nn;
pub mod optim;
pub mod utils;
pub mod viz;

// Ré-exporte les types principaux pour qu'ils soient accessibles via `gradlet_core::Value`
pub use error::GradletError;
pub use value::{constant, labeled_leaves, leaves, NodeId, Value};
pub use value_data::{live_value_count, reset_live_value_count, Op};
// Re-export traits required by public functions/structs
pub use num_traits;
