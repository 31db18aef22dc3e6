//! Deduplication operations over owned diagram sets.

use mayer_core::{Coefficient, Diagram, MayerError, RationalCoefficient, WeightedDiagram};

use crate::partition::{partition, partition_chunked, Partition};
use crate::DedupOpts;

/// Operation transforming an ordered diagram set into a new one.
pub trait GraphOp<G> {
    /// Consumes `graphs` and returns the transformed set, or the first error hit.
    fn apply(&self, graphs: Vec<G>) -> Result<Vec<G>, MayerError>;
}

/// Keeps the first-seen representative of every isomorphism class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdenticalFree {
    /// Execution options.
    pub opts: DedupOpts,
}

impl IdenticalFree {
    /// Creates the operation with the given options.
    pub fn new(opts: DedupOpts) -> Self {
        Self { opts }
    }
}

impl<G: Diagram + Sync> GraphOp<G> for IdenticalFree {
    fn apply(&self, graphs: Vec<G>) -> Result<Vec<G>, MayerError> {
        let classes = classify(&graphs, &self.opts)?;
        Ok(keep_first(graphs, &classes))
    }
}

/// Keeps one representative per isomorphism class carrying the exact sum of
/// the coefficients of the whole class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsoFree {
    /// Execution options; `drop_zero` removes classes whose weights cancel.
    pub opts: DedupOpts,
}

impl IsoFree {
    /// Creates the operation with the given options.
    pub fn new(opts: DedupOpts) -> Self {
        Self { opts }
    }
}

impl<G: WeightedDiagram + Sync> GraphOp<G> for IsoFree {
    fn apply(&self, graphs: Vec<G>) -> Result<Vec<G>, MayerError> {
        let classes = classify(&graphs, &self.opts)?;
        merge_classes(graphs, &classes, self.opts.drop_zero)
    }
}

/// Sequential [`IdenticalFree`] with default options. Unlike the operation it
/// does not need `G: Sync`.
pub fn identical_free<G: Diagram>(graphs: Vec<G>) -> Result<Vec<G>, MayerError> {
    let classes = partition(&graphs)?;
    Ok(keep_first(graphs, &classes))
}

/// Sequential [`IsoFree`]; `drop_zero` as in [`DedupOpts`]. Does not need `G: Sync`.
pub fn iso_free<G: WeightedDiagram>(graphs: Vec<G>, drop_zero: bool) -> Result<Vec<G>, MayerError> {
    let classes = partition(&graphs)?;
    merge_classes(graphs, &classes, drop_zero)
}

fn classify<G: Diagram + Sync>(graphs: &[G], opts: &DedupOpts) -> Result<Partition, MayerError> {
    match opts.parallel_chunk {
        Some(chunk) => partition_chunked(graphs, chunk),
        None => partition(graphs),
    }
}

fn keep_first<G>(graphs: Vec<G>, classes: &Partition) -> Vec<G> {
    let kept = take_representatives(graphs, &classes.representatives);
    log::debug!(
        "identical-free: {} diagrams -> {} classes ({} comparisons)",
        classes.class_of.len(),
        kept.len(),
        classes.comparisons
    );
    kept
}

fn merge_classes<G: WeightedDiagram>(
    graphs: Vec<G>,
    classes: &Partition,
    drop_zero: bool,
) -> Result<Vec<G>, MayerError> {
    let mut sums: Vec<Option<RationalCoefficient>> = vec![None; classes.len()];
    for (graph, &class) in graphs.iter().zip(&classes.class_of) {
        match sums[class].as_mut() {
            Some(sum) => sum.add(graph.coefficient()).map_err(|err| {
                err.with_context("class", class)
                    .with_context("representative", classes.representatives[class])
            })?,
            None => sums[class] = Some(graph.coefficient().copy()),
        }
    }

    let mut merged = Vec::with_capacity(classes.len());
    for (mut graph, sum) in take_representatives(graphs, &classes.representatives)
        .into_iter()
        .zip(sums)
    {
        let Some(sum) = sum else { continue };
        if drop_zero && sum.is_zero() {
            continue;
        }
        *graph.coefficient_mut() = sum;
        merged.push(graph);
    }
    log::debug!(
        "iso-free: {} diagrams -> {} classes, {} kept ({} comparisons)",
        classes.class_of.len(),
        classes.len(),
        merged.len(),
        classes.comparisons
    );
    Ok(merged)
}

// `representatives` is ascending, so one forward pass moves them out in order.
fn take_representatives<G>(graphs: Vec<G>, representatives: &[usize]) -> Vec<G> {
    let mut wanted = representatives.iter().copied().peekable();
    graphs
        .into_iter()
        .enumerate()
        .filter_map(|(index, graph)| {
            if wanted.peek() == Some(&index) {
                wanted.next();
                Some(graph)
            } else {
                None
            }
        })
        .collect()
}
