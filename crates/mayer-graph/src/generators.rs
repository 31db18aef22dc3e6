use itertools::Itertools;
use mayer_core::rng::RngHandle;
use mayer_core::{MayerError, WeightedDiagram};
use serde::{Deserialize, Serialize};

use crate::flags::{GraphConfig, NodeLabel};
use crate::graph::LabeledGraph;
use crate::ids::make_node;

/// Largest node count [`all_diagrams`] enumerates (2^15 bond subsets).
pub const MAX_ENUMERATED_NODES: usize = 6;

/// Options for the exhaustive diagram enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOpts {
    /// Keep only connected diagrams.
    pub connected_only: bool,
    /// Colour given to every generated field point.
    pub node_color: char,
}

impl Default for GeneratorOpts {
    fn default() -> Self {
        Self {
            connected_only: false,
            node_color: 'o',
        }
    }
}

/// Enumerates every labeled diagram on `n_nodes` field points whose bonds all
/// have colour `bond_color`, one per subset of node pairs.
///
/// Diagrams come out in ascending order of their bond-subset bit mask, so the
/// output order is stable across runs. Isomorphic labelings are all produced;
/// collapsing them is the job of the deduplication operations.
pub fn all_diagrams(
    n_nodes: usize,
    bond_color: char,
    opts: &GeneratorOpts,
) -> Result<Vec<LabeledGraph>, MayerError> {
    if n_nodes > MAX_ENUMERATED_NODES {
        return Err(MayerError::graph(
            "enumeration-too-large",
            "exhaustive enumeration is limited to small diagrams",
        )
        .with_context("nodes", n_nodes)
        .with_context("cap", MAX_ENUMERATED_NODES));
    }
    let config = GraphConfig {
        default_node_color: opts.node_color,
        default_bond: bond_color,
        ..GraphConfig::default()
    };
    let pairs: Vec<(usize, usize)> = (0..n_nodes).tuple_combinations().collect();
    let mut diagrams = Vec::new();
    for mask in 0u32..(1u32 << pairs.len()) {
        let mut graph = LabeledGraph::with_field_nodes(n_nodes, config.clone())?;
        for (bit, &(a, b)) in pairs.iter().enumerate() {
            if mask >> bit & 1 == 1 {
                graph.connect(make_node(a), make_node(b))?;
            }
        }
        if opts.connected_only && !graph.is_connected() {
            continue;
        }
        diagrams.push(graph);
    }
    Ok(diagrams)
}

/// Draws a diagram on `n_nodes` field points where each pair is bonded with
/// probability `bond_probability`.
pub fn random_diagram(
    n_nodes: usize,
    bond_probability: f64,
    bond_color: char,
    rng: &mut RngHandle,
) -> Result<LabeledGraph, MayerError> {
    if !(0.0..=1.0).contains(&bond_probability) {
        return Err(MayerError::graph(
            "invalid-probability",
            "bond probability must lie in [0, 1]",
        )
        .with_context("probability", bond_probability));
    }
    let mut graph = LabeledGraph::with_field_nodes(n_nodes, GraphConfig::default())?;
    for (a, b) in (0..n_nodes).tuple_combinations() {
        if rng.bond_present(bond_probability) {
            graph.add_bond(make_node(a), make_node(b), bond_color)?;
        }
    }
    Ok(graph)
}

/// Returns a copy of `graph` in which node `node` is a root point of the same colour.
pub fn with_root(graph: &LabeledGraph, node: usize) -> Result<LabeledGraph, MayerError> {
    let root = make_node(node);
    graph.node_label(root)?;
    let mut rooted =
        LabeledGraph::new(graph.config().clone()).with_coefficient(graph.coefficient().clone());
    for current in graph.nodes() {
        let label = graph.node_label(current)?;
        if current == root {
            rooted.add_node(NodeLabel::root(label.color))?;
        } else {
            rooted.add_node(label)?;
        }
    }
    for (a, b, color) in graph.bonds() {
        rooted.add_bond(a, b, color)?;
    }
    Ok(rooted)
}

/// Returns a uniformly random relabeling of `graph`.
pub fn shuffled_copy(graph: &LabeledGraph, rng: &mut RngHandle) -> Result<LabeledGraph, MayerError> {
    graph.relabel(&rng.permutation(graph.node_count()))
}
