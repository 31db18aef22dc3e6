use serde::{Deserialize, Serialize};

/// Identifier for a node within a [`LabeledGraph`](crate::LabeledGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Position of `id` in the label and adjacency vectors.
pub(crate) fn node_index(id: NodeId) -> usize {
    usize::try_from(id.as_raw()).unwrap_or(usize::MAX)
}

/// Identifier of the node stored at `index`.
pub(crate) fn make_node(index: usize) -> NodeId {
    NodeId(index as u64)
}

/// Orders the endpoints of an undirected bond so each bond has one key.
pub(crate) fn bond_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
