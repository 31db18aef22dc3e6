use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use mayer_core::{Diagram, MayerError, RationalCoefficient, WeightedDiagram};

use crate::flags::{GraphConfig, NodeLabel};
use crate::ids::{bond_key, make_node, node_index, NodeId};
use crate::iso;

/// Weighted cluster diagram: labeled nodes joined by coloured undirected bonds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph {
    config: GraphConfig,
    labels: Vec<NodeLabel>,
    bonds: BTreeMap<(usize, usize), char>,
    adjacency: Vec<BTreeSet<usize>>,
    coefficient: RationalCoefficient,
}

impl LabeledGraph {
    /// Creates an empty diagram with unit weight.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            labels: Vec::new(),
            bonds: BTreeMap::new(),
            adjacency: Vec::new(),
            coefficient: RationalCoefficient::default(),
        }
    }

    /// Creates a bondless diagram of `count` field points in the default colour.
    pub fn with_field_nodes(count: usize, config: GraphConfig) -> Result<Self, MayerError> {
        let label = NodeLabel::field(config.default_node_color);
        let mut graph = Self::new(config);
        for _ in 0..count {
            graph.add_node(label)?;
        }
        Ok(graph)
    }

    /// Returns the configuration used by this diagram.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Replaces the weight, consuming and returning the diagram.
    pub fn with_coefficient(mut self, coefficient: RationalCoefficient) -> Self {
        self.coefficient = coefficient;
        self
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of bonds.
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns an iterator over all node identifiers.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(make_node)
    }

    /// Returns every bond as `(lower, upper, colour)` in ascending order.
    pub fn bonds(&self) -> impl Iterator<Item = (NodeId, NodeId, char)> + '_ {
        self.bonds
            .iter()
            .map(|(&(a, b), &color)| (make_node(a), make_node(b), color))
    }

    /// Returns the label of a node.
    pub fn node_label(&self, node: NodeId) -> Result<NodeLabel, MayerError> {
        self.ensure_node(node)?;
        Ok(self.labels[node_index(node)])
    }

    /// Adds a node and returns its identifier.
    pub fn add_node(&mut self, label: NodeLabel) -> Result<NodeId, MayerError> {
        if self.labels.len() >= self.config.max_nodes {
            return Err(MayerError::graph(
                "too-many-nodes",
                "diagram node capacity would be exceeded",
            )
            .with_context("cap", self.config.max_nodes));
        }
        let id = make_node(self.labels.len());
        self.labels.push(label);
        self.adjacency.push(BTreeSet::new());
        Ok(id)
    }

    /// Adds a bond of the given colour between two distinct nodes.
    pub fn add_bond(&mut self, a: NodeId, b: NodeId, color: char) -> Result<(), MayerError> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        if a == b {
            return Err(MayerError::graph("self-bond", "bonds must join distinct nodes")
                .with_context("node", a.as_raw()));
        }
        let key = bond_key(node_index(a), node_index(b));
        if self.bonds.contains_key(&key) {
            return Err(MayerError::graph("duplicate-bond", "bond already exists")
                .with_context("a", key.0)
                .with_context("b", key.1));
        }
        self.bonds.insert(key, color);
        self.adjacency[key.0].insert(key.1);
        self.adjacency[key.1].insert(key.0);
        Ok(())
    }

    /// Adds a bond in the configured default colour.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), MayerError> {
        let color = self.config.default_bond;
        self.add_bond(a, b, color)
    }

    /// Removes a bond and returns its colour.
    pub fn remove_bond(&mut self, a: NodeId, b: NodeId) -> Result<char, MayerError> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        let key = bond_key(node_index(a), node_index(b));
        let color = self.bonds.remove(&key).ok_or_else(|| {
            MayerError::graph("missing-bond", "bond does not exist")
                .with_context("a", key.0)
                .with_context("b", key.1)
        })?;
        self.adjacency[key.0].remove(&key.1);
        self.adjacency[key.1].remove(&key.0);
        Ok(color)
    }

    /// Returns the colour of the bond between `a` and `b`, if any.
    pub fn bond(&self, a: NodeId, b: NodeId) -> Option<char> {
        self.bond_at(node_index(a), node_index(b))
    }

    /// Returns whether `a` and `b` are bonded.
    pub fn has_bond(&self, a: NodeId, b: NodeId) -> bool {
        self.bond(a, b).is_some()
    }

    /// Returns the number of bonds incident to a node.
    pub fn degree(&self, node: NodeId) -> Result<usize, MayerError> {
        self.ensure_node(node)?;
        Ok(self.adjacency[node_index(node)].len())
    }

    /// Returns the nodes bonded to `node` in ascending order.
    pub fn neighbours(&self, node: NodeId) -> Result<Vec<NodeId>, MayerError> {
        self.ensure_node(node)?;
        Ok(self.adjacency[node_index(node)]
            .iter()
            .map(|&idx| make_node(idx))
            .collect())
    }

    /// Returns whether every node is reachable from every other. The empty
    /// diagram counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.labels.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.labels.len()];
        let mut queue = VecDeque::from([0usize]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == self.labels.len()
    }

    /// Returns the diagram obtained by moving node `i` to position `permutation[i]`.
    /// Labels, bond colours and the weight travel with their nodes.
    pub fn relabel(&self, permutation: &[usize]) -> Result<Self, MayerError> {
        let n = self.labels.len();
        let mut hit = vec![false; n];
        let valid = permutation.len() == n
            && permutation
                .iter()
                .all(|&target| target < n && !std::mem::replace(&mut hit[target], true));
        if !valid {
            return Err(MayerError::graph(
                "invalid-permutation",
                "relabeling must be a permutation of the node indices",
            )
            .with_context("nodes", n)
            .with_context("len", permutation.len()));
        }

        let mut labels = self.labels.clone();
        for (old, &new) in permutation.iter().enumerate() {
            labels[new] = self.labels[old];
        }
        let mut relabeled = Self {
            config: self.config.clone(),
            labels,
            bonds: BTreeMap::new(),
            adjacency: vec![BTreeSet::new(); n],
            coefficient: self.coefficient.clone(),
        };
        for (&(a, b), &color) in &self.bonds {
            relabeled.add_bond(make_node(permutation[a]), make_node(permutation[b]), color)?;
        }
        Ok(relabeled)
    }

    pub(crate) fn label_at(&self, index: usize) -> NodeLabel {
        self.labels[index]
    }

    pub(crate) fn bond_at(&self, a: usize, b: usize) -> Option<char> {
        self.bonds.get(&bond_key(a, b)).copied()
    }

    pub(crate) fn adjacent(&self, index: usize) -> &BTreeSet<usize> {
        &self.adjacency[index]
    }

    fn ensure_node(&self, node: NodeId) -> Result<(), MayerError> {
        if node_index(node) >= self.labels.len() {
            return Err(MayerError::graph("unknown-node", "node does not exist")
                .with_context("node", node.as_raw()));
        }
        Ok(())
    }
}

impl Default for LabeledGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl Diagram for LabeledGraph {
    fn is_isomorphic(&self, other: &Self) -> Result<bool, MayerError> {
        Ok(iso::find_isomorphism(self, other)?.is_some())
    }
}

impl WeightedDiagram for LabeledGraph {
    fn coefficient(&self) -> &RationalCoefficient {
        &self.coefficient
    }

    fn coefficient_mut(&mut self) -> &mut RationalCoefficient {
        &mut self.coefficient
    }
}

impl fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <", self.coefficient)?;
        for (idx, label) in self.labels.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{label}")?;
        }
        write!(f, " |")?;
        for (&(a, b), color) in &self.bonds {
            write!(f, " {a}-{b}:{color}")?;
        }
        write!(f, ">")
    }
}
