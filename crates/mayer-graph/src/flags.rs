use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`LabeledGraph`](crate::LabeledGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum number of nodes a diagram may hold.
    pub max_nodes: usize,
    /// Bond colour used by [`LabeledGraph::connect`](crate::LabeledGraph::connect).
    pub default_bond: char,
    /// Node colour used by [`LabeledGraph::with_field_nodes`](crate::LabeledGraph::with_field_nodes).
    pub default_node_color: char,
    /// Upper bound on candidate assignments tried by one isomorphism search.
    /// `None` searches exhaustively.
    #[serde(default)]
    pub iso_step_limit: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_nodes: 32,
            default_bond: 'f',
            default_node_color: 'o',
            iso_step_limit: None,
        }
    }
}

/// Role of a node in a cluster diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Fixed (root) point that is not integrated over.
    Root,
    /// Field point integrated over the volume.
    Field,
}

/// Label carried by every node; relabelings must preserve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeLabel {
    /// Root or field point.
    pub kind: NodeKind,
    /// Species colour of the point.
    pub color: char,
}

impl NodeLabel {
    /// Creates a field-point label.
    pub const fn field(color: char) -> Self {
        Self {
            kind: NodeKind::Field,
            color,
        }
    }

    /// Creates a root-point label.
    pub const fn root(color: char) -> Self {
        Self {
            kind: NodeKind::Root,
            color,
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            NodeKind::Root => 'R',
            NodeKind::Field => 'F',
        };
        write!(f, "{kind}:{}", self.color)
    }
}
