//! Label-preserving isomorphism search between diagrams.
//!
//! Cheap relabeling invariants reject most non-isomorphic pairs before any
//! search. Surviving pairs go through a backtracking search that assigns nodes
//! in a connectivity-guided order and only pairs nodes with equal invariants.

use mayer_core::MayerError;

use crate::flags::NodeLabel;
use crate::graph::LabeledGraph;
use crate::ids::{make_node, NodeId};

/// Relabeling-invariant fingerprint of a single node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeInvariant {
    /// Label of the node.
    pub label: NodeLabel,
    /// Number of incident bonds.
    pub degree: usize,
    /// Sorted `(bond colour, neighbour label)` pairs of the incident bonds.
    pub incident: Vec<(char, NodeLabel)>,
}

/// Computes the invariant of every node, indexed like the diagram's nodes.
pub fn node_invariants(graph: &LabeledGraph) -> Vec<NodeInvariant> {
    (0..graph.node_count())
        .map(|node| {
            let mut incident: Vec<(char, NodeLabel)> = graph
                .adjacent(node)
                .iter()
                .filter_map(|&other| {
                    graph
                        .bond_at(node, other)
                        .map(|color| (color, graph.label_at(other)))
                })
                .collect();
            incident.sort_unstable();
            NodeInvariant {
                label: graph.label_at(node),
                degree: incident.len(),
                incident,
            }
        })
        .collect()
}

/// Returns whether `a` and `b` are label-preserving relabelings of each other.
pub fn are_isomorphic(a: &LabeledGraph, b: &LabeledGraph) -> Result<bool, MayerError> {
    Ok(find_isomorphism(a, b)?.is_some())
}

/// Searches for a label-preserving bijection from the nodes of `a` onto `b`.
///
/// On success `mapping[i]` is the node of `b` that node `i` of `a` maps to.
/// The search budget is the smaller of the two diagrams' step limits.
pub fn find_isomorphism(
    a: &LabeledGraph,
    b: &LabeledGraph,
) -> Result<Option<Vec<NodeId>>, MayerError> {
    let Some(candidates) = matching_candidates(a, b) else {
        return Ok(None);
    };
    let mut search = Search::new(a, b, &candidates, true);
    search.extend(0)?;
    if search.found == 0 {
        return Ok(None);
    }
    Ok(Some(search.first.into_iter().map(make_node).collect()))
}

/// Counts the label-preserving automorphisms of a diagram, i.e. its symmetry
/// number. A diagram on `n` nodes has `n! / count` distinct labelings.
pub fn automorphism_count(graph: &LabeledGraph) -> Result<u64, MayerError> {
    let Some(candidates) = matching_candidates(graph, graph) else {
        return Err(MayerError::isomorphism(
            "invariant-mismatch",
            "diagram invariants disagree with themselves",
        ));
    };
    let mut search = Search::new(graph, graph, &candidates, false);
    search.extend(0)?;
    Ok(search.found)
}

fn matching_candidates(a: &LabeledGraph, b: &LabeledGraph) -> Option<Vec<Vec<usize>>> {
    if a.node_count() != b.node_count() || a.bond_count() != b.bond_count() {
        return None;
    }
    let inv_a = node_invariants(a);
    let inv_b = node_invariants(b);
    let mut sorted_a = inv_a.clone();
    let mut sorted_b = inv_b.clone();
    sorted_a.sort_unstable();
    sorted_b.sort_unstable();
    if sorted_a != sorted_b {
        return None;
    }
    Some(
        inv_a
            .iter()
            .map(|invariant| {
                inv_b
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| *other == invariant)
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect(),
    )
}

// Fewest candidates first, then grow along bonds so that every later node is
// constrained by already placed neighbours.
fn search_order(graph: &LabeledGraph, candidates: &[Vec<usize>]) -> Vec<usize> {
    let n = candidates.len();
    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        let next = (0..n)
            .filter(|&node| !placed[node])
            .min_by_key(|&node| {
                let anchored = graph
                    .adjacent(node)
                    .iter()
                    .filter(|&&other| placed[other])
                    .count();
                (
                    std::cmp::Reverse(anchored),
                    candidates[node].len(),
                    std::cmp::Reverse(graph.adjacent(node).len()),
                    node,
                )
            });
        match next {
            Some(node) => {
                placed[node] = true;
                order.push(node);
            }
            None => break,
        }
    }
    order
}

// Tighter of the two budgets; symmetric in its operands.
fn shared_limit(a: &LabeledGraph, b: &LabeledGraph) -> Option<u64> {
    match (a.config().iso_step_limit, b.config().iso_step_limit) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (limit, None) | (None, limit) => limit,
    }
}

struct Search<'a> {
    a: &'a LabeledGraph,
    b: &'a LabeledGraph,
    candidates: &'a [Vec<usize>],
    order: Vec<usize>,
    forward: Vec<usize>,
    used: Vec<bool>,
    stop_at_first: bool,
    found: u64,
    first: Vec<usize>,
    steps: u64,
    limit: Option<u64>,
}

impl<'a> Search<'a> {
    fn new(
        a: &'a LabeledGraph,
        b: &'a LabeledGraph,
        candidates: &'a [Vec<usize>],
        stop_at_first: bool,
    ) -> Self {
        let n = candidates.len();
        Self {
            a,
            b,
            candidates,
            order: search_order(a, candidates),
            forward: vec![usize::MAX; n],
            used: vec![false; n],
            stop_at_first,
            found: 0,
            first: Vec::new(),
            steps: 0,
            limit: shared_limit(a, b),
        }
    }

    fn extend(&mut self, depth: usize) -> Result<(), MayerError> {
        if depth == self.order.len() {
            if self.found == 0 {
                self.first = self.forward.clone();
            }
            self.found += 1;
            return Ok(());
        }
        let node = self.order[depth];
        let candidates = self.candidates;
        for &target in &candidates[node] {
            if self.used[target] {
                continue;
            }
            self.charge_step()?;
            if !self.consistent(depth, node, target) {
                continue;
            }
            self.forward[node] = target;
            self.used[target] = true;
            self.extend(depth + 1)?;
            self.used[target] = false;
            self.forward[node] = usize::MAX;
            if self.stop_at_first && self.found > 0 {
                return Ok(());
            }
        }
        Ok(())
    }

    fn consistent(&self, depth: usize, node: usize, target: usize) -> bool {
        self.order[..depth].iter().all(|&placed| {
            self.a.bond_at(node, placed) == self.b.bond_at(target, self.forward[placed])
        })
    }

    fn charge_step(&mut self) -> Result<(), MayerError> {
        self.steps += 1;
        match self.limit {
            Some(limit) if self.steps > limit => Err(MayerError::isomorphism(
                "iso-budget-exceeded",
                "isomorphism search exceeded its step budget",
            )
            .with_context("limit", limit)
            .with_context("nodes", self.a.node_count())
            .with_hint("raise GraphConfig::iso_step_limit or leave it unset")),
            _ => Ok(()),
        }
    }
}
