#![deny(missing_docs)]

//! Labeled Mayer cluster diagrams implementing the `mayer-core` contracts.
//!
//! A [`LabeledGraph`] holds root and field points joined by coloured bonds and
//! carries an exact [`RationalCoefficient`](mayer_core::RationalCoefficient)
//! weight. The [`iso`] module decides label-preserving isomorphism, which is what
//! the deduplication operations in `mayer-iso` consume through
//! [`Diagram`](mayer_core::Diagram).

mod flags;
mod generators;
mod graph;
mod ids;
pub mod iso;

pub use flags::{GraphConfig, NodeKind, NodeLabel};
pub use generators::{
    all_diagrams, random_diagram, shuffled_copy, with_root, GeneratorOpts, MAX_ENUMERATED_NODES,
};
pub use graph::LabeledGraph;
pub use ids::NodeId;
pub use iso::{are_isomorphic, automorphism_count, find_isomorphism, NodeInvariant};
